//! Legality of multi-card plays.

use crate::core::card::{total_value, Card};
use crate::core::config::{MAX_COMBO_CARDS, MAX_COMBO_TOTAL};

/// Returns `true` if `cards` may be played together as one attack.
///
/// Suits must be pairwise distinct; this also applies to an Ace paired with
/// another card. Beyond that a play is legal when it is:
/// - a single card;
/// - exactly two cards, one of them an Ace;
/// - two to four Ace-free cards of the same rank summing to at most 10.
///
/// The verdict does not depend on the order of `cards`.
pub fn is_valid_play(cards: &[Card]) -> bool {
    if cards.is_empty() || !suits_distinct(cards) {
        return false;
    }
    if cards.len() == 1 {
        return true;
    }

    let companions = cards.iter().filter(|c| c.is_companion()).count();
    if cards.len() == 2 && companions == 1 {
        return true;
    }

    if cards.len() <= MAX_COMBO_CARDS && companions == 0 {
        let rank = cards[0].rank();
        return cards.iter().all(|c| c.rank() == rank) && total_value(cards) <= MAX_COMBO_TOTAL;
    }
    false
}

fn suits_distinct(cards: &[Card]) -> bool {
    cards
        .iter()
        .enumerate()
        .all(|(i, a)| cards[i + 1..].iter().all(|b| a.suit() != b.suit()))
}
