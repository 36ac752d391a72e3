//! Terminal rendering of the table and the statistics log.

use std::string::String;

use crate::core::{Card, GameEngine};
use crate::storage::{stats::format_timestamp, StatsRecord};

/// Print the welcome banner.
pub fn print_banner() {
    std::println!("╔══════════════════════════════════════════════════════════╗");
    std::println!("║                      R E G I C I D E                     ║");
    std::println!("║                        solo mode                         ║");
    std::println!("╚══════════════════════════════════════════════════════════╝");
}

/// Render hand positions 1-based, skipping positions in `exclude`.
pub fn print_hand(hand: &[Card], exclude: &[usize]) {
    for (i, card) in hand.iter().enumerate() {
        if !exclude.contains(&i) {
            std::println!("    [{}] {}", i + 1, card);
        }
    }
}

/// One-line summary of every pile.
pub fn pile_summary(engine: &GameEngine) -> String {
    std::format!(
        "Castle: {} | Tavern: {} | Played: {} | Discard: {}",
        engine.castle().len(),
        engine.tavern().len(),
        engine.played().len(),
        engine.discard().len()
    )
}

/// Show the active enemy, the hand and the piles.
pub fn print_table(engine: &GameEngine) {
    std::println!("\n════════════════════════════════════════════════════════════");
    match engine.active_enemy() {
        Some(enemy) => {
            std::print!(
                "  Enemy: {}  HP {}  ATK {}",
                enemy,
                engine.enemy_health(),
                engine.enemy_attack()
            );
            if engine.damage_reduction() > 0 {
                std::print!(" (shield {}, hits for {})", engine.damage_reduction(), engine.effective_damage());
            }
            std::println!();
        }
        None => std::println!("  The castle has fallen."),
    }
    std::println!("  {}", pile_summary(engine));
    std::println!("  Your hand ({}):", engine.player_name());
    print_hand(engine.hand(), &[]);
    std::println!("════════════════════════════════════════════════════════════");
}

/// Show the game result.
pub fn print_result(engine: &GameEngine) {
    if engine.is_victory() {
        std::println!("\n🎉 VICTORY! The castle has fallen, {}.", engine.player_name());
    } else {
        std::println!("\n💀 DEFEAT. Cards played: {}", engine.cards_played());
    }
}

/// Print the statistics log as a list of entries.
pub fn print_stats(records: &[StatsRecord]) {
    std::println!("\n------------------- GAME STATISTICS -------------------");
    if records.is_empty() {
        std::println!("No games recorded yet.");
        return;
    }
    for record in records {
        std::println!("Date          : {} UTC", format_timestamp(record.timestamp));
        std::println!("Cards played  : {}", record.cards_played);
        std::println!("Enemy health  : {}", record.enemy_health);
        std::println!("Hand          : {}", record.hand);
        std::println!("Outcome       : {}", record.outcome);
        std::println!("-------------------------------------------------------");
    }
}

pub fn print_rules() {
    std::println!("\n╔══════════════════════════════════════════════════════════╗");
    std::println!("║                        HOW TO PLAY                       ║");
    std::println!("╠══════════════════════════════════════════════════════════╣");
    std::println!("║ Defeat all 12 face cards. Jacks 20/10, Queens 30/15,     ║");
    std::println!("║ Kings 40/20 (health/attack).                             ║");
    std::println!("║                                                          ║");
    std::println!("║ Attack with one card, an Ace plus one card, or 2-4 cards ║");
    std::println!("║ of the same rank totalling 10 or less. No two cards may  ║");
    std::println!("║ share a suit.                                            ║");
    std::println!("║                                                          ║");
    std::println!("║ Suit effects (not against an enemy of the same suit):    ║");
    std::println!("║   ♥ return cards from discard to the tavern              ║");
    std::println!("║   ♦ draw cards (hand limit 8)                            ║");
    std::println!("║   ♠ shield against the enemy's attack                    ║");
    std::println!("║   ♣ double the damage                                    ║");
    std::println!("║                                                          ║");
    std::println!("║ A surviving enemy strikes back: discard cards worth at   ║");
    std::println!("║ least its attack or lose.                                ║");
    std::println!("╚══════════════════════════════════════════════════════════╝\n");
}
