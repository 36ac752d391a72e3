#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::cli::{parse_positions, print_hand, print_result, print_rules, print_table};
use crate::core::{
    is_valid_play, AttackOutcome, AttackResult, DefenseOutcome, GameEngine, Kill, PlayError,
};

use super::{AttackChoice, DefenseChoice, Player};

/// Interactive player reading commands from a line-based input.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Player reading from standard input. Holds the stdin lock while alive.
    pub fn new() -> Self {
        Self::with_input(io::stdin().lock())
    }

    /// Player reading from any line source (used for scripted sessions).
    pub fn with_input(input: impl BufRead + 'static) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        // flush failures only affect the prompt, not the game
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn choose_attack(&mut self, engine: &GameEngine) -> AttackChoice {
        print_table(engine);
        loop {
            std::print!("\nAttack with card positions [e.g. 3 or 1,4] ('save', 'quit', 'help'): ");
            let line = match self.read_line() {
                Some(line) => line,
                None => {
                    std::println!("\nInput closed - saving the game.");
                    return AttackChoice::Save;
                }
            };

            if line.eq_ignore_ascii_case("help") {
                print_rules();
                continue;
            }
            if line.eq_ignore_ascii_case("save") {
                return AttackChoice::Save;
            }
            if line.eq_ignore_ascii_case("quit") {
                return AttackChoice::Surrender;
            }

            match parse_positions(&line, engine.hand().len()) {
                Ok(positions) => {
                    let cards: Vec<_> = positions.iter().map(|&i| engine.hand()[i]).collect();
                    if !is_valid_play(&cards) {
                        std::println!("✗ Illegal combination. Type 'help' for the rules.");
                        continue;
                    }
                    return AttackChoice::Play(positions);
                }
                Err(e) => {
                    std::println!("✗ Invalid input: {}", e);
                }
            }
        }
    }

    fn choose_defense(&mut self, engine: &GameEngine, selected: &[usize]) -> DefenseChoice {
        let required = engine.effective_damage();
        if selected.is_empty() {
            std::println!("\n⚔️  The enemy strikes back for {} damage!", required);
        } else {
            let total: u32 = selected.iter().map(|&i| engine.hand()[i].value()).sum();
            std::println!(
                "\nDefense insufficient ({}/{}). You need {} more.",
                total,
                required,
                required.saturating_sub(total)
            );
        }
        std::println!("Cards available:");
        print_hand(engine.hand(), selected);
        loop {
            std::print!("Defend with card positions [e.g. 5,1,2] ('0' to give up, 'save'): ");
            let line = match self.read_line() {
                Some(line) => line,
                None => {
                    std::println!("\nInput closed - saving the game.");
                    return DefenseChoice::Save;
                }
            };

            if line == "0" || line.eq_ignore_ascii_case("quit") {
                return DefenseChoice::Surrender;
            }
            if line.eq_ignore_ascii_case("save") {
                return DefenseChoice::Save;
            }
            match parse_positions(&line, engine.hand().len()) {
                Ok(positions) => {
                    if let Some(&dup) = positions.iter().find(|p| selected.contains(p)) {
                        std::println!("✗ Card {} is already part of this defense.", dup + 1);
                        continue;
                    }
                    return DefenseChoice::Cards(positions);
                }
                Err(e) => std::println!("✗ Invalid input: {}", e),
            }
        }
    }

    fn handle_attack(&mut self, outcome: &AttackOutcome) {
        let effects = &outcome.effects;
        if effects.recycled > 0 {
            std::println!("♥ Hearts: {} cards returned to the tavern", effects.recycled);
        }
        if effects.drawn > 0 {
            std::println!("♦ Diamonds: drew {} cards", effects.drawn);
        }
        if effects.shield > 0 {
            std::println!("♠ Spades: shield increased by {}", effects.shield);
        }
        if effects.doubled {
            std::println!("♣ Clubs: damage doubled to {}", outcome.damage);
        }
        std::println!("💥 {} damage dealt to {}", outcome.damage, outcome.enemy);
        match outcome.result {
            AttackResult::Survived { health, .. } => {
                std::println!("{} has {} health left.", outcome.enemy, health);
            }
            AttackResult::Defeated { kill, next } => {
                report_kill(outcome, kill);
                std::println!("A new enemy appears: {}", next);
            }
            AttackResult::Victory { kill } => report_kill(outcome, kill),
        }
    }

    fn handle_defense(&mut self, outcome: &DefenseOutcome) {
        match outcome {
            DefenseOutcome::Blocked { total, required, .. } => {
                std::println!("🛡️  Blocked! ({} against {})", total, required);
            }
            DefenseOutcome::Insufficient { .. } => {}
            DefenseOutcome::Failed { total, required } => {
                std::println!("✗ Defense failed ({}/{}) and no cards remain.", total, required);
            }
        }
    }

    fn handle_rejection(&mut self, error: PlayError) {
        std::println!("✗ {}", error);
    }

    fn handle_joker(&mut self, drawn: usize, remaining: u32) {
        std::println!("🃏 Joker! Drew a fresh hand of {} cards ({} jokers left).", drawn, remaining);
    }

    fn handle_game_over(&mut self, engine: &GameEngine) {
        print_result(engine);
    }
}

fn report_kill(outcome: &AttackOutcome, kill: Kill) {
    match kill {
        Kill::Exact => std::println!("⚔️  Exact kill! {} joins the tavern.", outcome.enemy),
        Kill::Overkill => std::println!("⚔️  {} defeated and discarded.", outcome.enemy),
    }
}
