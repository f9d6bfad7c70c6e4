//! Line-oriented prompts.
//!
//! `Terminal` wraps any `BufRead` + `Write` pair. Every prompt loops until it
//! gets acceptable input; the only ways out are valid input, closed input,
//! or an I/O error.

use std::io::{BufRead, Write};

use tracing::trace;

use super::ShellError;
use crate::core::{Difficulty, Guess, LetterSet};

/// Input and output for one session.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for rendering.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print a line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), ShellError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a letter or word until the input is acceptable.
    ///
    /// `tried` holds every letter guessed so far; repeating one is refused.
    pub fn prompt_guess(&mut self, tried: &LetterSet) -> Result<Guess, ShellError> {
        loop {
            let raw = self.read_line("Guess a letter or word: ")?;
            match Guess::validate(&raw, tried) {
                Ok(guess) => return Ok(guess),
                Err(err) => {
                    trace!(%raw, %err, "rejected guess");
                    self.say(err)?;
                }
            }
        }
    }

    /// Ask for a custom secret word. An empty answer means "pick one for me".
    pub fn ask_secret_word(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            let secret = self.read_line("Your own secret word (or Enter for a random one): ")?;
            if secret.is_empty() {
                return Ok(None);
            }
            if secret.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Ok(Some(secret));
            }
            trace!("rejected secret word");
            self.say("Only letters A-Z, please.")?;
        }
    }

    /// Ask for a difficulty. Anything but `e` or `h` is Normal.
    pub fn choose_difficulty(&mut self) -> Result<Difficulty, ShellError> {
        let choice = self.read_line("Difficulty [E]asy=7, [N]ormal=6, [H]ard=5 (Enter=N): ")?;
        Ok(Difficulty::from_choice(&choice))
    }

    /// Ask whether to play another round.
    pub fn ask_replay(&mut self) -> Result<bool, ShellError> {
        let answer = self.read_line("Play again? (y/n): ")?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(term: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(term.into_inner().1).unwrap()
    }

    #[test]
    fn test_read_line_trims() {
        let mut term = terminal("  hello  \n");
        assert_eq!(term.read_line("> ").unwrap(), "hello");
        assert_eq!(output(term), "> ");
    }

    #[test]
    fn test_read_line_eof() {
        let mut term = terminal("");
        assert!(matches!(term.read_line("> "), Err(ShellError::InputClosed)));
    }

    #[test]
    fn test_prompt_guess_reprompts_per_violation() {
        let tried: LetterSet = ['a'].into_iter().collect();
        let mut term = terminal("\n4\na\nb\n");

        assert_eq!(term.prompt_guess(&tried).unwrap(), Guess::Letter('b'));

        let text = output(term);
        assert!(text.contains("Please enter something."));
        assert!(text.contains("Only letters A-Z are allowed."));
        assert!(text.contains("You already tried that letter."));
        assert_eq!(text.matches("Guess a letter or word: ").count(), 4);
    }

    #[test]
    fn test_prompt_guess_word() {
        let mut term = terminal("PLANET\n");
        assert_eq!(
            term.prompt_guess(&LetterSet::new()).unwrap(),
            Guess::Word("planet".to_string())
        );
    }

    #[test]
    fn test_ask_secret_word() {
        let mut term = terminal("\n");
        assert_eq!(term.ask_secret_word().unwrap(), None);

        let mut term = terminal("s3cret\nSecret\n");
        assert_eq!(term.ask_secret_word().unwrap(), Some("Secret".to_string()));
        assert!(output(term).contains("Only letters A-Z, please."));
    }

    #[test]
    fn test_choose_difficulty() {
        assert_eq!(terminal("e\n").choose_difficulty().unwrap(), Difficulty::Easy);
        assert_eq!(terminal("H\n").choose_difficulty().unwrap(), Difficulty::Hard);
        assert_eq!(terminal("\n").choose_difficulty().unwrap(), Difficulty::Normal);
        assert_eq!(terminal("zzz\n").choose_difficulty().unwrap(), Difficulty::Normal);
    }

    #[test]
    fn test_ask_replay() {
        assert!(terminal("y\n").ask_replay().unwrap());
        assert!(terminal("YES\n").ask_replay().unwrap());
        assert!(!terminal("n\n").ask_replay().unwrap());
        assert!(!terminal("\n").ask_replay().unwrap());
    }
}
