//! Commonly used types and utilities for ease of import.

pub use crate::{is_valid_play, Card, GameEngine, GameState, GameStatus, Player, PlayError, Suit};

#[cfg(feature = "std")]
pub use crate::{CliPlayer, Session, SessionEnd, StorageConfig};
