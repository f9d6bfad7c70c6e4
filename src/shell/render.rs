//! Text rendering: gallows art, board summary, feedback and outcome lines.
//!
//! Every function writes to an `impl Write` so the same code drives stdout
//! and the in-memory buffers used by tests.

use std::io::{self, Write};

use crate::core::{GuessInputError, GuessOutcome, LetterSet, SecretWord};

/// Gallows drawings, from empty to fully hanged.
pub const GALLOWS: [&str; 7] = [
    r"
 +---+
 |   |
     |
     |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
     |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
 |   |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
/|   |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
/|\  |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
/|\  |
/    |
     |
=========",
    r"
 +---+
 |   |
 O   |
/|\  |
/ \  |
     |
=========",
];

/// Drawing for the given number of lives used.
///
/// Games with more lives than stages stay on the last drawing.
#[must_use]
pub fn gallows(lives_used: u32) -> &'static str {
    let stage = (lives_used as usize).min(GALLOWS.len() - 1);
    GALLOWS[stage]
}

/// Wrong letters, sorted, uppercase and space-joined, or `-` if none.
#[must_use]
pub fn miss_list(wrong: &LetterSet) -> String {
    if wrong.is_empty() {
        return "-".to_string();
    }

    wrong
        .iter()
        .map(|letter| letter.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the drawing, the mask, the misses and the remaining lives.
pub fn render_state<W: Write>(
    out: &mut W,
    mask: &str,
    wrong: &LetterSet,
    lives_used: u32,
    max_lives: u32,
) -> io::Result<()> {
    writeln!(out, "{}", gallows(lives_used))?;
    writeln!(out)?;
    writeln!(out, "Word:  {mask}")?;
    writeln!(out, "Miss:  {}", miss_list(wrong))?;
    writeln!(out, "Lives: {}/{}", max_lives.saturating_sub(lives_used), max_lives)?;
    writeln!(out)
}

/// Print a one-line reaction to a resolved guess.
pub fn render_feedback<W: Write>(out: &mut W, outcome: &GuessOutcome) -> io::Result<()> {
    match outcome {
        GuessOutcome::Hit {
            letter,
            first_time: true,
        } => writeln!(
            out,
            "✅ Good job! '{}' is in the word.",
            letter.to_ascii_uppercase()
        ),
        GuessOutcome::Hit {
            first_time: false, ..
        } => Ok(()),
        GuessOutcome::Miss { letter, .. } => writeln!(
            out,
            "❌ Nope! '{}' is not in the word.",
            letter.to_ascii_uppercase()
        ),
        GuessOutcome::Solved => writeln!(out, "✅ That's the word!"),
        GuessOutcome::WrongWord(word) => writeln!(
            out,
            "'{}' is not the correct word.",
            word.to_ascii_uppercase()
        ),
        GuessOutcome::Invalid => writeln!(out, "{}", GuessInputError::NotAlphabetic),
        GuessOutcome::GameOver => Ok(()),
    }
}

/// Print the final win or loss message.
pub fn render_outcome<W: Write>(out: &mut W, won: bool, secret: &SecretWord) -> io::Result<()> {
    if won {
        writeln!(out, "🎉 You won! The word was '{}'.", secret.to_uppercase())?;
    } else {
        writeln!(out, "💀 You lost. The word was '{}'.", secret.to_uppercase())?;
    }
    writeln!(out)
}
