//! Classic Hangman.
//!
//! - The player guesses one letter or the whole word per turn
//! - A new wrong letter or any wrong word costs one life
//! - Repeating a wrong letter is free
//! - Revealing every letter wins; spending every life loses

mod game;

pub use game::{HangmanBuilder, HangmanGame};
