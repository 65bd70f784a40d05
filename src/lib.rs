// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod game;
pub mod logging;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use game::{GameState, GameStatus, GuessOutcome, MAX_GUESSES};
pub use session::{GameInterface, TurnView, UserAction, game_loop};
pub use wordbank::{FALLBACK_WORDS, WordList, load_words, parse_words, try_load_words};
