use crate::game::{GameStatus, GuessOutcome};
use crate::session::{GameInterface, TurnView, UserAction, describe_outcome};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

pub const DEFAULT_WORDS_PATH: &str = "Words.txt";

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a comma-separated word list
    #[arg(short = 'w', long = "words", default_value = DEFAULT_WORDS_PATH)]
    pub words_path: PathBuf,

    /// Seed for the random word choice, for reproducible games
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Use the full-screen terminal interface
    #[arg(long = "tui")]
    pub tui: bool,

    /// Log file location (defaults to the platform cache directory)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    GuessLetter,
    GuessWord,
    NewGame,
    Exit,
    Invalid,
}

/// Menu choices available for the given status. Guessing is only offered while
/// the game is active, starting over only once it is finished.
pub fn parse_menu_choice(input: &str, status: GameStatus) -> MenuChoice {
    let input = input.trim().to_lowercase();
    match (input.as_str(), status.is_finished()) {
        ("q" | "quit" | "exit", _) => MenuChoice::Exit,
        ("1", false) => MenuChoice::GuessLetter,
        ("2", false) => MenuChoice::GuessWord,
        ("1" | "n" | "new", true) => MenuChoice::NewGame,
        _ => MenuChoice::Invalid,
    }
}

/// A letter guess is exactly one character after trimming. The character is
/// passed on unvalidated; the game ignores anything that is not a letter.
fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// UI Input/Output functions

pub fn display_board(view: &TurnView) {
    println!();
    println!("*** Hangman ***");
    println!("--------------------");
    println!("Correct guesses:\t{}", view.revealed);
    println!("Incorrect letters:\t{}", view.incorrect);
    println!("Guesses left:\t\t{}", view.guesses_left);
    println!("--------------------");
    println!("{}", view.status_message());
}

/// Reads one line. `None` on end of input or a read error.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

pub fn read_action<R: BufRead>(reader: &mut R, status: GameStatus) -> Option<UserAction> {
    if status.is_finished() {
        println!("Enter 1 to start a new game or q to quit:");
    } else {
        println!("Enter 1 to guess a letter, 2 to guess the word or q to quit:");
    }
    let Some(input) = read_line(reader) else {
        return Some(UserAction::Exit);
    };

    match parse_menu_choice(&input, status) {
        MenuChoice::Exit => Some(UserAction::Exit),
        MenuChoice::NewGame => Some(UserAction::NewGame),
        MenuChoice::GuessLetter => {
            println!("Enter a letter:");
            let Some(input) = read_line(reader) else {
                return Some(UserAction::Exit);
            };
            match parse_letter(&input) {
                Some(letter) => Some(UserAction::GuessLetter(letter)),
                None => {
                    println!("Please enter a single letter.");
                    None
                }
            }
        }
        MenuChoice::GuessWord => {
            println!("Enter a word:");
            let Some(input) = read_line(reader) else {
                return Some(UserAction::Exit);
            };
            Some(UserAction::GuessWord(input.trim().to_string()))
        }
        MenuChoice::Invalid => {
            println!("Invalid choice.");
            None
        }
    }
}

pub fn display_outcome(outcome: GuessOutcome) {
    println!("{}", describe_outcome(outcome));
}

pub fn display_exit_message() {
    println!("Exiting.");
}

pub fn display_new_game_message(word_count: usize) {
    println!("New game started. Picked a word from {word_count} candidates.");
}

/// CLI implementation of the `GameInterface` trait
/// This struct wraps a `BufRead` reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn render(&mut self, view: &TurnView) {
        display_board(view);
    }

    fn read_action(&mut self, view: &TurnView) -> Option<UserAction> {
        read_action(&mut self.reader, view.status)
    }

    fn display_outcome(&mut self, outcome: GuessOutcome) {
        display_outcome(outcome);
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        display_new_game_message(word_count);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::parse_from(["hangman"]);
        assert_eq!(cli.words_path, PathBuf::from("Words.txt"));
        assert_eq!(cli.seed, None);
        assert!(!cli.tui);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_parse_cli_all_options() {
        let cli = Cli::parse_from([
            "hangman",
            "-w",
            "custom_words.txt",
            "--seed",
            "42",
            "--tui",
            "--log-file",
            "/tmp/hangman.log",
        ]);
        assert_eq!(cli.words_path, PathBuf::from("custom_words.txt"));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.tui);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/hangman.log")));
    }

    #[test]
    fn test_parse_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["hangman", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_parse_menu_choice_active() {
        let active = GameStatus::Active;
        assert_eq!(parse_menu_choice("1", active), MenuChoice::GuessLetter);
        assert_eq!(parse_menu_choice(" 2 \n", active), MenuChoice::GuessWord);
        assert_eq!(parse_menu_choice("q", active), MenuChoice::Exit);
        assert_eq!(parse_menu_choice("EXIT", active), MenuChoice::Exit);
        assert_eq!(parse_menu_choice("n", active), MenuChoice::Invalid);
        assert_eq!(parse_menu_choice("3", active), MenuChoice::Invalid);
        assert_eq!(parse_menu_choice("", active), MenuChoice::Invalid);
    }

    #[test]
    fn test_parse_menu_choice_finished() {
        for status in [GameStatus::Won, GameStatus::Lost] {
            assert_eq!(parse_menu_choice("1", status), MenuChoice::NewGame);
            assert_eq!(parse_menu_choice("N", status), MenuChoice::NewGame);
            assert_eq!(parse_menu_choice("quit", status), MenuChoice::Exit);
            assert_eq!(parse_menu_choice("2", status), MenuChoice::Invalid);
        }
    }

    #[test]
    fn test_parse_letter() {
        assert_eq!(parse_letter("a\n"), Some('a'));
        assert_eq!(parse_letter("  Z  "), Some('Z'));
        assert_eq!(parse_letter("8"), Some('8'));
        assert_eq!(parse_letter("ab"), None);
        assert_eq!(parse_letter("\n"), None);
    }

    #[test]
    fn test_read_action_letter() {
        let mut reader = Cursor::new("1\ne\n");
        assert_eq!(
            read_action(&mut reader, GameStatus::Active),
            Some(UserAction::GuessLetter('e'))
        );
    }

    #[test]
    fn test_read_action_word() {
        let mut reader = Cursor::new("2\n  testing \n");
        assert_eq!(
            read_action(&mut reader, GameStatus::Active),
            Some(UserAction::GuessWord("testing".to_string()))
        );
    }

    #[test]
    fn test_read_action_letter_too_long() {
        let mut reader = Cursor::new("1\nab\n");
        assert_eq!(read_action(&mut reader, GameStatus::Active), None);
    }

    #[test]
    fn test_read_action_invalid_choice() {
        let mut reader = Cursor::new("9\n");
        assert_eq!(read_action(&mut reader, GameStatus::Active), None);
    }

    #[test]
    fn test_read_action_new_game_when_finished() {
        let mut reader = Cursor::new("1\n");
        assert_eq!(
            read_action(&mut reader, GameStatus::Lost),
            Some(UserAction::NewGame)
        );
    }

    #[test]
    fn test_read_action_end_of_input_exits() {
        let mut reader = Cursor::new("");
        assert_eq!(
            read_action(&mut reader, GameStatus::Active),
            Some(UserAction::Exit)
        );

        let mut reader = Cursor::new("1\n");
        assert_eq!(
            read_action(&mut reader, GameStatus::Active),
            Some(UserAction::Exit)
        );
    }
}
