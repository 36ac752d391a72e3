//! Playing cards: rank/suit pairs of a standard 52-card deck.

use alloc::vec::Vec;
use core::fmt;

use crate::core::common::CardError;
use crate::core::config::{MAX_RANK, SUITS};

/// One of the four French suits. Each suit carries a distinct effect when played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    /// Human-readable suit name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable playing card. Ranks run 1 (Ace) through 13 (King).
///
/// Deserialization goes through [`Card::new`], so decoded cards are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawCard"))]
pub struct Card {
    rank: u8,
    suit: Suit,
}

/// Unchecked wire form of a [`Card`].
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawCard {
    rank: u8,
    suit: Suit,
}

#[cfg(feature = "std")]
impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.rank, raw.suit)
    }
}

impl Card {
    /// Create a card, rejecting ranks outside `1..=13`.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank == 0 || rank > MAX_RANK {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Aces are companions: they pair with any single other card.
    pub fn is_companion(&self) -> bool {
        self.rank == 1
    }

    /// Jacks, Queens and Kings form the castle.
    pub fn is_face(&self) -> bool {
        self.rank >= 11
    }

    /// Attack and defense value of the card.
    pub fn value(&self) -> u32 {
        self.rank as u32
    }

    fn rank_label(&self) -> &'static str {
        const LABELS: [&str; 14] = [
            "", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[self.rank as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// All 52 cards, grouped by suit in `SUITS` order and ascending rank.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(SUITS.len() * MAX_RANK as usize);
    for suit in SUITS {
        for rank in 1..=MAX_RANK {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Sum of card values.
pub fn total_value<'a, I>(cards: I) -> u32
where
    I: IntoIterator<Item = &'a Card>,
{
    cards.into_iter().map(Card::value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_ranks() {
        assert_eq!(Card::new(0, Suit::Spades), Err(CardError::InvalidRank(0)));
        assert_eq!(Card::new(14, Suit::Hearts), Err(CardError::InvalidRank(14)));
        assert!(Card::new(13, Suit::Clubs).is_ok());
    }

    #[test]
    fn labels() {
        assert_eq!(alloc::format!("{}", Card::new(1, Suit::Spades).unwrap()), "A♠");
        assert_eq!(alloc::format!("{}", Card::new(10, Suit::Hearts).unwrap()), "10♥");
        assert_eq!(alloc::format!("{}", Card::new(12, Suit::Diamonds).unwrap()), "Q♦");
    }

    #[test]
    fn full_deck_has_52_distinct_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        for (i, a) in deck.iter().enumerate() {
            for b in &deck[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
