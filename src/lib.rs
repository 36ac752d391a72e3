#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod storage;

pub use crate::core::*;
pub use player::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use storage::{Outcome, SaveStore, StatsLog, StatsRecord, StorageConfig};
