//! Rules engine trait for word-guessing games.
//!
//! Games implement `RulesEngine` to define their rules:
//! - How a guess modifies state
//! - Win/loss conditions
//! - What the player is shown

use serde::{Deserialize, Serialize};

use crate::core::guess::{Guess, GuessOutcome};
use crate::core::state::GameState;
use crate::core::word::SecretWord;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Every letter was revealed.
    Won,
    /// The player ran out of lives.
    Lost,
}

impl GameResult {
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Won
    }
}

/// Rules engine trait.
///
/// The shell drives a game only through this trait.
///
/// ## Implementation Notes
///
/// - `apply_guess`: Must be deterministic; must not change state once
///   `is_terminal` returns `Some`
/// - `is_won` and `is_lost` must never both be true
pub trait RulesEngine {
    /// Current observable state.
    fn state(&self) -> &GameState;

    /// The word being guessed. Shown to the player only once the game ends.
    fn secret(&self) -> &SecretWord;

    /// Apply a guess to the game.
    fn apply_guess(&mut self, guess: &Guess) -> GuessOutcome;

    /// Partially revealed display form of the secret word.
    fn mask(&self) -> String;

    /// Has every letter of the secret word been guessed?
    fn is_won(&self) -> bool;

    /// Have all lives been spent?
    fn is_lost(&self) -> bool {
        self.state().is_out_of_lives()
    }

    // === Convenience Methods ===

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult> {
        if self.is_won() {
            Some(GameResult::Won)
        } else if self.is_lost() {
            Some(GameResult::Lost)
        } else {
            None
        }
    }
}
