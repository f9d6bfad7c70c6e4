//! # rust-hangman
//!
//! A terminal Hangman game built around a small, deterministic game-state
//! engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit Configuration**: Word lists, lives and the secret word are
//!    passed in through `GameConfig`. Nothing is read from globals.
//!
//! 2. **Tagged Guesses**: A guess is `Guess::Letter` or `Guess::Word`,
//!    decided once when input is parsed.
//!
//! 3. **Testable I/O**: The shell runs over any `BufRead`/`Write` pair.
//!
//! ## Modules
//!
//! - `core`: Secret words, guesses, state, RNG, configuration
//! - `rules`: RulesEngine trait and game results
//! - `games`: The Hangman rules
//! - `shell`: Prompts, rendering and the game loop
//!
//! ```
//! use rust_hangman::{Guess, HangmanGame, RulesEngine};
//!
//! let mut game = HangmanGame::with_secret("cat", 6).unwrap();
//! game.apply_guess(&Guess::Letter('c'));
//! assert_eq!(game.mask(), "C _ _");
//!
//! game.apply_guess(&Guess::Word("CAT".into()));
//! assert!(game.is_won());
//! ```

pub mod core;
pub mod games;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Difficulty, GameConfig,
    GameRng,
    GameState, LetterSet,
    Guess, GuessInputError, GuessOutcome,
    ParseWordError, SecretWord, WordList, DEFAULT_WORDS,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::{HangmanBuilder, HangmanGame};

pub use crate::shell::{play, Session, ShellConfig, ShellError, Terminal};
