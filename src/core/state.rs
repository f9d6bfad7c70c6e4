//! Mutable game state: letters tried so far and lives spent.
//!
//! ## GameState
//!
//! - Guessed letters (present in the secret word)
//! - Wrong guesses (absent from the secret word)
//! - Lives used and the fixed lives ceiling
//!
//! Both letter sets only ever grow. Lives used only ever grows and is
//! capped at `max_lives`. The secret word itself lives on the game, not here,
//! so a `GameState` can be shown to the player as-is.

use im::OrdSet;
use serde::{Deserialize, Serialize};

/// Sorted set of lowercase letters.
///
/// `im` persistent set: cheap to clone for snapshots and iterates in
/// alphabetical order, which is the order the miss list is shown in.
pub type LetterSet = OrdSet<char>;

/// Observable state of a single play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    guessed: LetterSet,
    wrong: LetterSet,
    lives_used: u32,
    max_lives: u32,
}

impl GameState {
    /// Create a fresh state with nothing guessed.
    ///
    /// ## Panics
    ///
    /// Panics if `max_lives` is zero. Game construction validates this first.
    #[must_use]
    pub fn new(max_lives: u32) -> Self {
        assert!(max_lives > 0, "Must have at least 1 life");

        Self {
            guessed: LetterSet::new(),
            wrong: LetterSet::new(),
            lives_used: 0,
            max_lives,
        }
    }

    // === Queries ===

    /// Letters confirmed present in the secret word.
    #[must_use]
    pub fn guessed(&self) -> &LetterSet {
        &self.guessed
    }

    /// Letters confirmed absent from the secret word.
    #[must_use]
    pub fn wrong(&self) -> &LetterSet {
        &self.wrong
    }

    /// Every letter tried so far, right or wrong.
    #[must_use]
    pub fn tried(&self) -> LetterSet {
        self.guessed.clone().union(self.wrong.clone())
    }

    #[must_use]
    pub fn lives_used(&self) -> u32 {
        self.lives_used
    }

    #[must_use]
    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    #[must_use]
    pub fn lives_remaining(&self) -> u32 {
        self.max_lives.saturating_sub(self.lives_used)
    }

    /// Have all lives been spent?
    #[must_use]
    pub fn is_out_of_lives(&self) -> bool {
        self.lives_used >= self.max_lives
    }

    // === Mutation ===

    /// Record a letter that is in the word.
    ///
    /// Returns true if the letter was not already guessed.
    pub fn record_hit(&mut self, letter: char) -> bool {
        self.guessed.insert(letter).is_none()
    }

    /// Record a letter that is not in the word.
    ///
    /// Only the first miss of a given letter costs a life. Returns true if
    /// a life was taken.
    pub fn record_miss(&mut self, letter: char) -> bool {
        if self.wrong.insert(letter).is_some() {
            return false;
        }
        self.lose_life();
        true
    }

    /// Spend one life, saturating at `max_lives`.
    pub fn lose_life(&mut self) {
        if self.lives_used < self.max_lives {
            self.lives_used += 1;
        }
    }

    /// Mark every given letter as guessed.
    pub fn reveal<I: IntoIterator<Item = char>>(&mut self, letters: I) {
        for letter in letters {
            self.guessed.insert(letter);
        }
    }
}
