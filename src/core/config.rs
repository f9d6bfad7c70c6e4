//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `Difficulty`: How many lives the player gets
//! - `WordList`: Where a random secret word comes from
//! - An optional explicit secret word
//!
//! Nothing is read from globals; the shell builds a `GameConfig` per game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::word::{ParseWordError, WordList};

/// Difficulty levels. Difficulty only changes the number of lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 7 lives.
    Easy,
    /// 6 lives.
    #[default]
    Normal,
    /// 5 lives.
    Hard,
}

impl Difficulty {
    /// Lives granted at this difficulty.
    #[must_use]
    pub const fn max_lives(self) -> u32 {
        match self {
            Difficulty::Easy => 7,
            Difficulty::Normal => 6,
            Difficulty::Hard => 5,
        }
    }

    /// Map a menu choice (`e`, `n`, `h`, any case) to a difficulty.
    ///
    /// Anything unrecognized, including an empty answer, is Normal.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim().to_ascii_lowercase().as_str() {
            "e" => Difficulty::Easy,
            "h" => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

/// A game could not be set up from the given configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no secret word given and the word list is empty")]
    EmptyWordList,

    #[error("invalid secret word: {0}")]
    InvalidSecretWord(ParseWordError),

    #[error("word list entry is not playable: {0}")]
    InvalidListWord(ParseWordError),

    #[error("max lives must be at least 1")]
    ZeroLives,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Lives before the game is lost.
    pub max_lives: u32,

    /// Pool for a random secret word.
    pub words: WordList,

    /// Explicit secret word; takes precedence over `words`.
    pub secret_word: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_lives: Difficulty::default().max_lives(),
            words: WordList::builtin(),
            secret_word: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the built-in words at Normal difficulty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set lives from a difficulty level.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.max_lives = difficulty.max_lives();
        self
    }

    /// Set lives directly.
    #[must_use]
    pub fn with_max_lives(mut self, max_lives: u32) -> Self {
        self.max_lives = max_lives;
        self
    }

    /// Replace the word list.
    #[must_use]
    pub fn with_words(mut self, words: WordList) -> Self {
        self.words = words;
        self
    }

    /// Fix the secret word instead of drawing one.
    #[must_use]
    pub fn with_secret_word(mut self, word: impl Into<String>) -> Self {
        self.secret_word = Some(word.into());
        self
    }
}
