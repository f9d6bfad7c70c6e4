//! The interactive game loop and the replay loop around it.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::config::ShellConfig;
use super::prompt::Terminal;
use super::render::{render_feedback, render_outcome, render_state};
use super::ShellError;
use crate::core::{GameConfig, GameRng};
use crate::games::HangmanBuilder;
use crate::rules::{GameResult, RulesEngine};

/// Play one game to the end.
///
/// Renders the board before every guess and once more after the last one,
/// then the outcome.
pub fn play<G, R, W>(game: &mut G, term: &mut Terminal<R, W>) -> Result<GameResult, ShellError>
where
    G: RulesEngine,
    R: BufRead,
    W: Write,
{
    loop {
        if let Some(result) = game.is_terminal() {
            show_board(game, term)?;
            render_outcome(term.output(), result.is_win(), game.secret())?;
            return Ok(result);
        }

        show_board(game, term)?;
        let guess = term.prompt_guess(&game.state().tried())?;
        let outcome = game.apply_guess(&guess);
        render_feedback(term.output(), &outcome)?;
    }
}

fn show_board<G, R, W>(game: &G, term: &mut Terminal<R, W>) -> Result<(), ShellError>
where
    G: RulesEngine,
    R: BufRead,
    W: Write,
{
    let state = game.state();
    render_state(
        term.output(),
        &game.mask(),
        state.wrong(),
        state.lives_used(),
        state.max_lives(),
    )?;
    Ok(())
}

/// A run of games sharing one terminal and one RNG.
pub struct Session<R, W> {
    term: Terminal<R, W>,
    config: ShellConfig,
    rng: GameRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(term: Terminal<R, W>, config: ShellConfig) -> Self {
        let rng = config.rng();
        Self { term, config, rng }
    }

    /// Give back the terminal.
    pub fn into_terminal(self) -> Terminal<R, W> {
        self.term
    }

    /// Play games until the player declines a replay or input closes.
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!(seed = self.rng.seed(), words = self.config.words.len(), "session start");

        match self.run_games() {
            Ok(()) | Err(ShellError::InputClosed) => {
                self.term.say("Thanks for playing! 👋")?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn run_games(&mut self) -> Result<(), ShellError> {
        self.term.say("===== HANGMAN =====")?;
        self.term.say("Tip: just press Enter for a random word.")?;

        loop {
            let secret = self.term.ask_secret_word()?;
            let difficulty = self.term.choose_difficulty()?;
            debug!(%difficulty, custom_word = secret.is_some(), "starting game");

            let mut config = GameConfig::new()
                .with_difficulty(difficulty)
                .with_words(self.config.words.clone());
            config.secret_word = secret;

            let mut game = HangmanBuilder::from_config(config).build(&mut self.rng)?;
            play(&mut game, &mut self.term)?;

            if !self.term.ask_replay()? {
                return Ok(());
            }
        }
    }
}
