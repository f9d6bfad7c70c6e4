//! Shell configuration loaded from the environment.
//!
//! The game takes no command-line arguments. Two optional variables adjust a
//! session:
//!
//! - `HANGMAN_WORDS`: comma-separated word list replacing the built-in one.
//!   Entries that are not plain A-Z words are skipped with a warning; if none
//!   are left, the built-in list stays.
//! - `HANGMAN_SEED`: fixes the secret word draw, for reproducible sessions

use std::env;

use tracing::warn;

use crate::core::{GameRng, WordList};

/// Session-wide settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Pool for random secret words.
    pub words: WordList,
    /// Seed for the word draw. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            words: WordList::builtin(),
            seed: None,
        }
    }
}

impl ShellConfig {
    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(words) = lookup("HANGMAN_WORDS") {
            let (words, rejected) = WordList::from_csv(&words).split_playable();
            for (word, err) in &rejected {
                warn!(word = %word, error = %err, "skipping HANGMAN_WORDS entry");
            }
            if words.is_empty() {
                warn!("HANGMAN_WORDS has no usable words, keeping the built-in list");
            } else {
                config.words = words;
            }
        }

        if let Some(seed) = read_parsed::<u64, _>(&lookup, "HANGMAN_SEED") {
            config.seed = Some(seed);
        }

        config
    }

    /// RNG for this session.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

fn read_parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
