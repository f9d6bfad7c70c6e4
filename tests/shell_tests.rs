//! Shell tests with scripted terminal input.
//!
//! These tests verify:
//! - Input validation recovers from every kind of bad guess
//! - The board is rendered before each guess and after the last
//! - Sessions replay and end on request or closed input

use std::io::Cursor;

use rust_hangman::{
    play, GameResult, HangmanGame, Session, ShellConfig, Terminal, WordList,
};

type ScriptedTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

fn scripted(lines: &[&str]) -> ScriptedTerminal {
    let mut input = lines.join("\n");
    input.push('\n');
    Terminal::new(Cursor::new(input.into_bytes()), Vec::new())
}

fn transcript(term: ScriptedTerminal) -> String {
    String::from_utf8(term.into_inner().1).unwrap()
}

/// Bad input never costs a life.
#[test]
fn test_invalid_input_is_free() {
    let mut game = HangmanGame::with_secret("owl", 6).unwrap();
    let mut term = scripted(&["", "o1", "x", "x", "X", "owl"]);

    assert_eq!(play(&mut game, &mut term).unwrap(), GameResult::Won);

    let text = transcript(term);
    assert_eq!(text.matches("Please enter something.").count(), 1);
    assert_eq!(text.matches("Only letters A-Z are allowed.").count(), 1);
    assert_eq!(text.matches("You already tried that letter.").count(), 2);
    assert!(text.contains("Lives: 5/6"));
    assert!(text.contains("You won! The word was 'OWL'."));
}

/// Gallows drawing grows with each miss.
#[test]
fn test_gallows_progression() {
    let mut game = HangmanGame::with_secret("a", 2).unwrap();
    let mut term = scripted(&["b", "c"]);

    assert_eq!(play(&mut game, &mut term).unwrap(), GameResult::Lost);

    let text = transcript(term);
    assert!(text.contains("Miss:  B C"));
    assert!(text.contains("Lives: 0/2"));
    // head and body, no arms yet
    assert!(text.contains(" O   |\n |   |"));
    assert!(!text.contains("/|"));
    assert!(text.contains("You lost. The word was 'A'."));
}

/// A full session: custom word, random word, then quit.
#[test]
fn test_session_two_games() {
    let config = ShellConfig {
        words: WordList::new(["planet"]),
        seed: Some(7),
    };
    let term = scripted(&[
        // game 1: custom word on easy
        "c4t", "cat", "e", "c", "a", "t", "yes",
        // game 2: random word on normal
        "", "", "planet", "no",
    ]);

    let mut session = Session::new(term, config);
    session.run().unwrap();

    let text = transcript(session.into_terminal());
    assert!(text.contains("Only letters A-Z, please."));
    assert!(text.contains("Lives: 7/7"));
    assert!(text.contains("The word was 'CAT'."));
    assert!(text.contains("Lives: 6/6"));
    assert!(text.contains("The word was 'PLANET'."));
    assert_eq!(text.matches("Play again? (y/n): ").count(), 2);
    assert!(text.ends_with("Thanks for playing! 👋\n"));
}

/// A bad `HANGMAN_WORDS` entry falls back to the built-in words instead of
/// failing when it is drawn.
#[test]
fn test_session_survives_unplayable_env_words() {
    let config = ShellConfig::from_lookup(|key: &str| match key {
        "HANGMAN_WORDS" => Some("c4t".to_string()),
        "HANGMAN_SEED" => Some("1".to_string()),
        _ => None,
    });
    assert_eq!(config.words, WordList::builtin());

    let term = scripted(&["", ""]);
    let mut session = Session::new(term, config);
    session.run().unwrap();

    let text = transcript(session.into_terminal());
    assert!(text.contains("Lives: 6/6"));
    assert!(text.ends_with("Thanks for playing! 👋\n"));
}

/// Closing input mid-game ends the session without an error.
#[test]
fn test_session_input_closed_mid_game() {
    let term = scripted(&["cat", "n", "c"]);
    let mut session = Session::new(term, ShellConfig::default());

    session.run().unwrap();

    let text = transcript(session.into_terminal());
    assert!(text.contains("Word:  C _ _"));
    assert!(text.ends_with("Thanks for playing! 👋\n"));
}
