//! Hangman game implementation.

use std::str::FromStr;

use tracing::{debug, info};

use crate::core::{
    ConfigError, GameConfig, GameRng, GameState, Guess, GuessOutcome, SecretWord, WordList,
};
use crate::rules::RulesEngine;

/// One play-through of Hangman.
///
/// Owns the secret word and the state; discard after the game ends and
/// build a new one to play again.
#[derive(Clone, Debug)]
pub struct HangmanGame {
    secret: SecretWord,
    state: GameState,
}

/// Builder for creating a HangmanGame.
#[derive(Clone, Debug, Default)]
pub struct HangmanBuilder {
    config: GameConfig,
}

impl HangmanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn max_lives(mut self, lives: u32) -> Self {
        self.config.max_lives = lives;
        self
    }

    pub fn words(mut self, words: WordList) -> Self {
        self.config.words = words;
        self
    }

    /// Use this word instead of drawing one. `None` keeps the random draw.
    pub fn secret_word(mut self, word: Option<impl Into<String>>) -> Self {
        self.config.secret_word = word.map(Into::into);
        self
    }

    /// Build the game, drawing a secret word from `rng` if none was given.
    pub fn build(self, rng: &mut GameRng) -> Result<HangmanGame, ConfigError> {
        let GameConfig {
            max_lives,
            words,
            secret_word,
        } = self.config;

        if max_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }

        let secret = match secret_word {
            Some(word) => SecretWord::from_str(&word).map_err(ConfigError::InvalidSecretWord)?,
            None => words
                .random_word(rng)
                .ok_or(ConfigError::EmptyWordList)?
                .map_err(ConfigError::InvalidListWord)?,
        };

        debug!(letters = secret.letter_count(), max_lives, "new game");

        Ok(HangmanGame {
            secret,
            state: GameState::new(max_lives),
        })
    }
}

impl HangmanGame {
    /// Shorthand for a game with a known secret word.
    pub fn with_secret(secret: &str, max_lives: u32) -> Result<Self, ConfigError> {
        HangmanBuilder::new()
            .max_lives(max_lives)
            .secret_word(Some(secret))
            .build(&mut GameRng::new(0))
    }

    fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_lowercase();

        if self.secret.contains(letter) {
            let first_time = self.state.record_hit(letter);
            GuessOutcome::Hit { letter, first_time }
        } else {
            let penalized = self.state.record_miss(letter);
            GuessOutcome::Miss { letter, penalized }
        }
    }

    fn guess_word(&mut self, word: &str) -> GuessOutcome {
        if self.secret.matches(word) {
            self.state.reveal(self.secret.distinct_letters());
            GuessOutcome::Solved
        } else {
            self.state.lose_life();
            GuessOutcome::WrongWord(word.to_ascii_lowercase())
        }
    }
}

impl RulesEngine for HangmanGame {
    fn state(&self) -> &GameState {
        &self.state
    }

    fn secret(&self) -> &SecretWord {
        &self.secret
    }

    fn apply_guess(&mut self, guess: &Guess) -> GuessOutcome {
        if self.is_terminal().is_some() {
            return GuessOutcome::GameOver;
        }

        if !guess.is_playable() {
            debug!(?guess, "rejected unplayable guess");
            return GuessOutcome::Invalid;
        }

        let outcome = match guess {
            Guess::Letter(letter) => self.guess_letter(*letter),
            Guess::Word(word) => self.guess_word(word),
        };

        debug!(
            ?outcome,
            cost_life = outcome.cost_life(),
            lives_used = self.state.lives_used(),
            max_lives = self.state.max_lives(),
            "resolved guess"
        );

        if let Some(result) = self.is_terminal() {
            info!(?result, "game over");
        }

        outcome
    }

    fn mask(&self) -> String {
        let guessed = self.state.guessed();
        self.secret
            .letters()
            .map(|ch| {
                if guessed.contains(&ch) {
                    ch.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_won(&self) -> bool {
        let guessed = self.state.guessed();
        self.secret.letters().all(|ch| guessed.contains(&ch))
    }
}
