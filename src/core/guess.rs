//! Guess representation: a single letter or a whole word.
//!
//! Raw terminal input is turned into a [`Guess`] through [`Guess::validate`],
//! which applies the input rules (non-empty, A-Z only, no repeated letters).
//! Rejections are [`GuessInputError`]s; the shell recovers from all of them by
//! asking again.
//!
//! ```
//! use rust_hangman::core::{Guess, LetterSet};
//!
//! let tried = LetterSet::new();
//! assert_eq!(Guess::validate(" E ", &tried), Ok(Guess::Letter('e')));
//! assert_eq!(Guess::validate("Planet", &tried), Ok(Guess::Word("planet".into())));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::LetterSet;

/// A player's guess, normalized to lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    /// One letter.
    Letter(char),
    /// An attempt at the whole secret word.
    Word(String),
}

/// Why a line of input is not an acceptable guess.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuessInputError {
    #[error("Please enter something.")]
    Empty,

    #[error("Only letters A-Z are allowed.")]
    NotAlphabetic,

    #[error("You already tried that letter.")]
    AlreadyTried(char),
}

impl Guess {
    /// Parse raw input without checking it against earlier guesses.
    pub fn parse(raw: &str) -> Result<Self, GuessInputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GuessInputError::Empty);
        }
        if !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(GuessInputError::NotAlphabetic);
        }

        let lower = trimmed.to_ascii_lowercase();
        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(Guess::Letter(letter)),
            _ => Ok(Guess::Word(lower)),
        }
    }

    /// Parse raw input and reject single letters that were already tried.
    ///
    /// Whole words may be repeated; only letters are deduplicated.
    pub fn validate(raw: &str, tried: &LetterSet) -> Result<Self, GuessInputError> {
        let guess = Self::parse(raw)?;
        if let Guess::Letter(letter) = guess {
            if tried.contains(&letter) {
                return Err(GuessInputError::AlreadyTried(letter));
            }
        }
        Ok(guess)
    }

    /// Could this guess have come out of [`Guess::parse`]?
    ///
    /// Letters must be A-Z and words non-empty A-Z; case is not checked.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        match self {
            Guess::Letter(letter) => letter.is_ascii_alphabetic(),
            Guess::Word(word) => {
                !word.is_empty() && word.chars().all(|ch| ch.is_ascii_alphabetic())
            }
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Letter(letter) => write!(f, "{}", letter.to_ascii_uppercase()),
            Guess::Word(word) => write!(f, "{}", word.to_ascii_uppercase()),
        }
    }
}

/// What happened when a guess was applied to a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The letter is in the word. `first_time` is false for a repeat.
    Hit { letter: char, first_time: bool },
    /// The letter is not in the word. `penalized` is false for a repeat.
    Miss { letter: char, penalized: bool },
    /// The whole-word guess was right; every letter is now revealed.
    Solved,
    /// The whole-word guess was wrong and cost a life.
    WrongWord(String),
    /// The game had already ended; nothing changed.
    GameOver,
    /// The guess was not a letter A-Z or a word of them; nothing changed.
    Invalid,
}

impl GuessOutcome {
    /// Was the guess correct?
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Hit { .. } | GuessOutcome::Solved)
    }

    /// Did the guess cost a life?
    #[must_use]
    pub fn cost_life(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Miss { penalized: true, .. } | GuessOutcome::WrongWord(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter() {
        assert_eq!(Guess::parse("a"), Ok(Guess::Letter('a')));
        assert_eq!(Guess::parse("Q"), Ok(Guess::Letter('q')));
        assert_eq!(Guess::parse("  z\n"), Ok(Guess::Letter('z')));
    }

    #[test]
    fn test_parse_word() {
        assert_eq!(Guess::parse("Mountain"), Ok(Guess::Word("mountain".to_string())));
        assert_eq!(Guess::parse("ok"), Ok(Guess::Word("ok".to_string())));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Guess::parse(""), Err(GuessInputError::Empty));
        assert_eq!(Guess::parse("   \n"), Err(GuessInputError::Empty));
    }

    #[test]
    fn test_parse_rejects_non_alphabetic() {
        for bad in ["1", "a1", "two words", "ü", "!", "c-t"] {
            assert_eq!(Guess::parse(bad), Err(GuessInputError::NotAlphabetic), "{bad}");
        }
    }

    #[test]
    fn test_validate_rejects_tried_letter() {
        let tried: LetterSet = ['a', 'x'].into_iter().collect();

        assert_eq!(Guess::validate("A", &tried), Err(GuessInputError::AlreadyTried('a')));
        assert_eq!(Guess::validate("x", &tried), Err(GuessInputError::AlreadyTried('x')));
        assert_eq!(Guess::validate("b", &tried), Ok(Guess::Letter('b')));
    }

    #[test]
    fn test_validate_allows_repeated_words() {
        let tried: LetterSet = ['a'].into_iter().collect();
        assert_eq!(Guess::validate("aa", &tried), Ok(Guess::Word("aa".to_string())));
    }

    #[test]
    fn test_playable_guesses() {
        assert!(Guess::Letter('a').is_playable());
        assert!(Guess::Letter('Q').is_playable());
        assert!(Guess::Word("Owl".to_string()).is_playable());

        assert!(!Guess::Letter('1').is_playable());
        assert!(!Guess::Letter('é').is_playable());
        assert!(!Guess::Letter(' ').is_playable());
        assert!(!Guess::Word(String::new()).is_playable());
        assert!(!Guess::Word("c4t".to_string()).is_playable());

        for raw in ["a", "Q", "mountain"] {
            assert!(Guess::parse(raw).unwrap().is_playable(), "{raw}");
        }
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Guess::Letter('c').to_string(), "C");
        assert_eq!(Guess::Word("cat".to_string()).to_string(), "CAT");
    }

    #[test]
    fn test_outcome_flags() {
        assert!(GuessOutcome::Hit { letter: 'a', first_time: false }.is_correct());
        assert!(GuessOutcome::Solved.is_correct());
        assert!(!GuessOutcome::GameOver.is_correct());

        assert!(GuessOutcome::Miss { letter: 'z', penalized: true }.cost_life());
        assert!(!GuessOutcome::Miss { letter: 'z', penalized: false }.cost_life());
        assert!(GuessOutcome::WrongWord("dog".to_string()).cost_life());
        assert!(!GuessOutcome::Solved.cost_life());
        assert!(!GuessOutcome::Invalid.is_correct());
        assert!(!GuessOutcome::Invalid.cost_life());
    }

    #[test]
    fn test_guess_serialization() {
        let guess = Guess::Word("owl".to_string());
        let json = serde_json::to_string(&guess).unwrap();
        let back: Guess = serde_json::from_str(&json).unwrap();
        assert_eq!(guess, back);
    }
}
