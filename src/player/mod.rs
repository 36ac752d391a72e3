//! Player trait and implementations
//!
//! A Player decides what to do at each prompt of a turn; the [`crate::Session`]
//! applies those decisions to the engine. Players only ever see the engine
//! through a shared reference.
//! - CliPlayer: Interactive command-line player

use alloc::vec::Vec;

use crate::core::{AttackOutcome, DefenseOutcome, GameEngine, PlayError};

/// Decision at the attack prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackChoice {
    /// Attack with the cards at these hand positions (0-based).
    Play(Vec<usize>),
    /// Save the game and leave.
    Save,
    /// Give up.
    Surrender,
}

/// Decision at the defense prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefenseChoice {
    /// Add the cards at these hand positions to the defense.
    Cards(Vec<usize>),
    Save,
    Surrender,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the cards for the next attack.
    fn choose_attack(&mut self, engine: &GameEngine) -> AttackChoice;

    /// Choose defense cards. `selected` holds positions already committed to
    /// this defense when topping up a short one.
    fn choose_defense(&mut self, engine: &GameEngine, selected: &[usize]) -> DefenseChoice;

    /// Inform the player of a resolved attack.
    fn handle_attack(&mut self, _outcome: &AttackOutcome) {}

    /// Inform the player of a resolved defense attempt.
    fn handle_defense(&mut self, _outcome: &DefenseOutcome) {}

    /// Inform the player that a choice was rejected by the rules.
    fn handle_rejection(&mut self, _error: PlayError) {}

    /// Inform the player that a joker refilled the hand.
    fn handle_joker(&mut self, _drawn: usize, _remaining: u32) {}

    /// Inform the player that the game ended.
    fn handle_game_over(&mut self, _engine: &GameEngine) {}
}

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
