use crate::game::{GameState, GameStatus, GuessOutcome};
use crate::wordbank::WordList;
use crate::{debug_log, info_log};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    GuessLetter(char),
    GuessWord(String),
    NewGame,
    Exit,
}

/// Snapshot of a game handed to the interface each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub revealed: String,
    pub incorrect: String,
    pub guesses_left: u32,
    pub guesses_used: u32,
    pub status: GameStatus,
    /// Only set once the game is lost.
    pub answer: Option<String>,
}

impl TurnView {
    #[must_use]
    pub fn from_game(game: &GameState) -> Self {
        let status = game.status();
        Self {
            revealed: game.revealed_letters(),
            incorrect: game.incorrect_letters(),
            guesses_left: game.guesses_left(),
            guesses_used: game.guesses_used(),
            status,
            answer: (status == GameStatus::Lost).then(|| game.secret_word()),
        }
    }

    /// One-line summary of where the game stands.
    #[must_use]
    pub fn status_message(&self) -> String {
        match (self.status, &self.answer) {
            (GameStatus::Won, _) => "You won!".to_string(),
            (GameStatus::Lost, Some(answer)) => format!("You lost! The word was {answer}."),
            (GameStatus::Lost, None) => "You lost!".to_string(),
            (GameStatus::Active, _) => format!("{} guesses left", self.guesses_left),
        }
    }
}

/// Phrase a guess outcome for the player.
#[must_use]
pub fn describe_outcome(outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Ignored => "That is not a valid guess.".to_string(),
        GuessOutcome::Repeated(letter) => format!("You already guessed '{letter}'."),
        GuessOutcome::Hit {
            letter,
            occurrences: 1,
        } => format!("Yes! '{letter}' appears once."),
        GuessOutcome::Hit {
            letter,
            occurrences,
        } => format!("Yes! '{letter}' appears {occurrences} times."),
        GuessOutcome::Miss(letter) => format!("Sorry, no '{letter}'."),
        GuessOutcome::WordCorrect => "That's the word!".to_string(),
        GuessOutcome::WordWrong => "That is not the word.".to_string(),
    }
}

/// Presentation side of a game session.
pub trait GameInterface {
    fn render(&mut self, view: &TurnView);
    /// `None` means no usable action this turn; the session re-renders and asks again.
    fn read_action(&mut self, view: &TurnView) -> Option<UserAction>;
    fn display_outcome(&mut self, outcome: GuessOutcome);
    fn display_new_game_message(&mut self, word_count: usize);
    fn display_exit_message(&mut self);
}

/// Play games from `words` until the interface asks to exit. Returns the last
/// game played.
pub fn game_loop<I, R>(words: &WordList, rng: &mut R, interface: &mut I) -> GameState
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut game = GameState::new(words, rng);
    info_log!("Game started with {} candidate words", words.len());

    loop {
        let view = TurnView::from_game(&game);
        interface.render(&view);

        let Some(action) = interface.read_action(&view) else {
            continue;
        };
        debug_log!("Action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                game.start_new_game(words, rng);
                info_log!("New game started");
                interface.display_new_game_message(words.len());
            }
            UserAction::GuessLetter(_) | UserAction::GuessWord(_) if view.status.is_finished() => {
                debug_log!("Ignoring guess, game is {:?}", view.status);
            }
            UserAction::GuessLetter(letter) => {
                let outcome = game.guess_letter(letter);
                interface.display_outcome(outcome);
            }
            UserAction::GuessWord(word) => {
                let outcome = game.guess_word(&word);
                interface.display_outcome(outcome);
            }
        }

        let status = game.status();
        if status != view.status && status.is_finished() {
            info_log!("Game finished: {:?}", status);
        }
    }

    game
}
