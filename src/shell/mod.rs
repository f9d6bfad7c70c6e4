//! Interactive terminal shell.
//!
//! - `config`: Environment overrides for a session
//! - `prompt`: Validating line prompts over any `BufRead`/`Write`
//! - `render`: Gallows art and board text
//! - `session`: The game loop and the replay loop

pub mod config;
pub mod prompt;
pub mod render;
pub mod session;

use thiserror::Error;

use crate::core::ConfigError;

pub use config::ShellConfig;
pub use prompt::Terminal;
pub use session::{play, Session};

/// Errors that end a session.
///
/// Bad guesses never show up here; the prompts recover from those.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not start a game: {0}")]
    Config(#[from] ConfigError),

    #[error("input closed")]
    InputClosed,
}
