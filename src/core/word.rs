//! Secret words and the word lists they are drawn from.
//!
//! ## SecretWord
//!
//! A validated, lowercase, ASCII-alphabetic word. Construction is the only
//! place validation happens; every `SecretWord` in the program is playable.
//!
//! ## WordList
//!
//! The pool a random secret word is chosen from. Entries are kept as given
//! and validated when one is picked; [`WordList::split_playable`] separates
//! out unusable entries up front.

use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::GameRng;

/// Why a string could not become a [`SecretWord`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseWordError {
    #[error("secret word must not be empty")]
    Empty,

    #[error("secret word `{0}` must contain only letters A-Z")]
    NotAlphabetic(String),
}

/// The word the player must guess.
///
/// Always lowercase and non-empty. Distinct letters are cached for O(1)
/// membership checks during guess resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretWord {
    letters: Vec<char>,
    distinct: FxHashSet<char>,
}

impl SecretWord {
    /// Does the word contain this (lowercase) letter?
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.distinct.contains(&letter)
    }

    /// The word's letters in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Each letter of the word, once.
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.distinct.iter().copied()
    }

    /// Case-insensitive comparison against a whole-word guess.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() == self.letters.len()
            && word
                .chars()
                .zip(self.letters.iter())
                .all(|(a, b)| a.to_ascii_lowercase() == *b)
    }

    /// Number of letters.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// The word in uppercase, as shown in outcome messages.
    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.letters.iter().map(char::to_ascii_uppercase).collect()
    }
}

impl FromStr for SecretWord {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseWordError::Empty);
        }

        if !s.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(ParseWordError::NotAlphabetic(s.to_owned()));
        }

        let letters: Vec<char> = s.chars().map(|ch| ch.to_ascii_lowercase()).collect();
        let distinct = letters.iter().copied().collect();

        Ok(Self { letters, distinct })
    }
}

impl TryFrom<String> for SecretWord {
    type Error = ParseWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<SecretWord> for String {
    fn from(value: SecretWord) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for SecretWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}

/// The words shipped with the game.
pub const DEFAULT_WORDS: &[&str] = &[
    "python",
    "algorithm",
    "variable",
    "keyboard",
    "planet",
    "mountain",
    "chocolate",
    "governance",
];

/// A pool of candidate secret words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create a word list from any collection of strings.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in list of [`DEFAULT_WORDS`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }

    /// Parse a comma-separated list, trimming whitespace and dropping blanks.
    #[must_use]
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(',').map(str::trim).filter(|w| !w.is_empty()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Split into the entries that parse as a [`SecretWord`] and the ones
    /// that do not, keeping order.
    pub fn split_playable(self) -> (WordList, Vec<(String, ParseWordError)>) {
        let mut playable = Vec::new();
        let mut rejected = Vec::new();

        for word in self.words {
            match SecretWord::from_str(&word) {
                Ok(_) => playable.push(word),
                Err(err) => rejected.push((word, err)),
            }
        }

        (WordList { words: playable }, rejected)
    }

    /// Pick a word uniformly at random.
    ///
    /// Returns `None` only if the list is empty.
    pub fn random_word(&self, rng: &mut GameRng) -> Option<Result<SecretWord, ParseWordError>> {
        rng.choose(&self.words).map(|word| SecretWord::from_str(word))
    }
}
