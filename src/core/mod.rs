//! Core engine types: secret words, guesses, state, RNG, configuration.
//!
//! This module holds the building blocks of a game. The rules that tie them
//! together live in `rules` and `games::hangman`.

pub mod config;
pub mod guess;
pub mod rng;
pub mod state;
pub mod word;

pub use config::{ConfigError, Difficulty, GameConfig};
pub use guess::{Guess, GuessInputError, GuessOutcome};
pub use rng::GameRng;
pub use state::{GameState, LetterSet};
pub use word::{ParseWordError, SecretWord, WordList, DEFAULT_WORDS};
