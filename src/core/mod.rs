//! Core rules engine (no_std compatible)
//!
//! Pure game logic over `alloc` collections: cards, play legality, and turn
//! resolution. File I/O, terminal interaction and logging setup live outside
//! this module.

pub mod card;
pub mod common;
pub mod config;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use card::{full_deck, total_value, Card, Suit};
pub use common::{CardError, PlayError};
pub use config::*;
pub use game::{
    AttackOutcome, AttackResult, DefenseOutcome, EffectReport, GameEngine, GameState, GameStatus,
    Kill, Phase,
};
pub use rules::is_valid_play;
