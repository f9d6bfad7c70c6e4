//! Concrete games built on the core engine.

pub mod hangman;

pub use hangman::{HangmanBuilder, HangmanGame};
