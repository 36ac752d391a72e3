//! Command-line interface utilities and display functions

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use std::string::String;

/// Parse comma-separated 1-based hand positions into 0-based indices.
pub fn parse_positions(input: &str, hand_len: usize) -> Result<Vec<usize>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut positions = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        let pos: usize = part
            .parse()
            .map_err(|_| format!("Invalid position '{}' - must be a number", part))?;
        if pos == 0 || pos > hand_len {
            return Err(format!("Position {} out of range - must be 1-{}", pos, hand_len));
        }
        if positions.contains(&(pos - 1)) {
            return Err(format!("Position {} listed twice", pos));
        }
        positions.push(pos - 1);
    }
    Ok(positions)
}
