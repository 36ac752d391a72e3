//! Common error types for card construction and turn resolution.

/// Errors returned when constructing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    /// Rank outside `1..=13`.
    InvalidRank(u8),
}

impl core::fmt::Display for CardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CardError::InvalidRank(r) => write!(f, "Invalid card rank {} (must be 1-13)", r),
        }
    }
}

/// Rejections from engine operations. A rejected call never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    /// The game already ended in victory or defeat.
    GameOver,
    /// An attack was attempted while a defense is pending.
    DefensePending,
    /// A defense was attempted with no counter-attack pending.
    NoDefensePending,
    /// An attack was attempted with no cards in hand.
    EmptyHand,
    /// No cards were selected for an attack.
    EmptySelection,
    /// Hand position is out of range.
    InvalidIndex(usize),
    /// Same hand position selected twice.
    DuplicateIndex(usize),
    /// The selected cards do not form a legal play.
    IllegalPlay,
}

impl core::fmt::Display for PlayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayError::GameOver => write!(f, "The game is already over"),
            PlayError::DefensePending => write!(f, "You must defend against the counter-attack first"),
            PlayError::NoDefensePending => write!(f, "There is no counter-attack to defend against"),
            PlayError::EmptyHand => write!(f, "You have no cards left to play"),
            PlayError::EmptySelection => write!(f, "No cards selected"),
            PlayError::InvalidIndex(i) => write!(f, "Position {} is not in your hand", i + 1),
            PlayError::DuplicateIndex(i) => write!(f, "Position {} selected more than once", i + 1),
            PlayError::IllegalPlay => write!(f, "Illegal combination of cards"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CardError {}

#[cfg(feature = "std")]
impl std::error::Error for PlayError {}
