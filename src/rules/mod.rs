//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - How a guess changes the state
//! - Win/loss conditions
//! - The masked word shown to the player
//!
//! The shell calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
