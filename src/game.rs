use crate::debug_log;
use crate::wordbank::WordList;
use rand::Rng;

pub const MAX_GUESSES: u32 = 10;
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Result of a single guess, for the presentation layer to phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not a valid guess, or no guesses remain. Nothing changed.
    Ignored,
    /// Letter was guessed before. Nothing changed.
    Repeated(char),
    Hit { letter: char, occurrences: usize },
    Miss(char),
    WordCorrect,
    WordWrong,
}

/// State of one game: the secret word, the letters revealed so far, wrong
/// letters in the order they were guessed, and the remaining guess count.
///
/// Status is never stored; [`GameState::status`] derives it on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret_word: Vec<char>,
    revealed: Vec<char>,
    incorrect: Vec<char>,
    guesses_left: u32,
}

impl GameState {
    /// Starts a game with a word drawn uniformly from `words`.
    pub fn new<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        let index = rng.gen_range(0..words.len());
        Self::with_secret_word(&words.words()[index])
    }

    #[must_use]
    pub fn with_secret_word(word: &str) -> Self {
        let secret_word: Vec<char> = word.to_uppercase().chars().collect();
        debug_log!("New game, secret word has {} letters", secret_word.len());
        Self {
            revealed: vec![PLACEHOLDER; secret_word.len()],
            secret_word,
            incorrect: Vec::new(),
            guesses_left: MAX_GUESSES,
        }
    }

    /// Discards the current game and starts over with a new secret word.
    pub fn start_new_game<R: Rng + ?Sized>(&mut self, words: &WordList, rng: &mut R) {
        *self = Self::new(words, rng);
    }

    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if !letter.is_ascii_alphabetic() || self.guesses_left == 0 {
            return GuessOutcome::Ignored;
        }
        let letter = letter.to_ascii_uppercase();
        if self.incorrect.contains(&letter) || self.revealed.contains(&letter) {
            return GuessOutcome::Repeated(letter);
        }

        self.guesses_left -= 1;

        let mut occurrences = 0;
        for (slot, &secret) in self.revealed.iter_mut().zip(&self.secret_word) {
            if secret == letter {
                *slot = letter;
                occurrences += 1;
            }
        }

        debug_log!(
            "Letter '{}' -> {} occurrence(s), {} guesses left",
            letter,
            occurrences,
            self.guesses_left
        );

        if occurrences == 0 {
            self.incorrect.push(letter);
            GuessOutcome::Miss(letter)
        } else {
            GuessOutcome::Hit {
                letter,
                occurrences,
            }
        }
    }

    /// Word guesses are not deduplicated: every well-formed attempt costs a
    /// guess, even if it repeats an earlier wrong one.
    pub fn guess_word(&mut self, word: &str) -> GuessOutcome {
        if word.is_empty()
            || !word.chars().all(|c| c.is_ascii_alphabetic())
            || self.guesses_left == 0
        {
            return GuessOutcome::Ignored;
        }

        self.guesses_left -= 1;

        let word = word.to_ascii_uppercase();
        if word.chars().eq(self.secret_word.iter().copied()) {
            self.revealed.clone_from(&self.secret_word);
            debug_log!("Word guessed correctly");
            GuessOutcome::WordCorrect
        } else {
            debug_log!("Wrong word, {} guesses left", self.guesses_left);
            GuessOutcome::WordWrong
        }
    }

    /// Revealed letters and placeholders separated by single spaces.
    #[must_use]
    pub fn revealed_letters(&self) -> String {
        join_spaced(&self.revealed)
    }

    /// Wrong letters in the order they were guessed, separated by single spaces.
    #[must_use]
    pub fn incorrect_letters(&self) -> String {
        join_spaced(&self.incorrect)
    }

    #[must_use]
    pub fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    #[must_use]
    pub fn guesses_used(&self) -> u32 {
        MAX_GUESSES - self.guesses_left
    }

    #[must_use]
    pub fn secret_word(&self) -> String {
        self.secret_word.iter().collect()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.revealed == self.secret_word {
            GameStatus::Won
        } else if self.guesses_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }
}

fn join_spaced(letters: &[char]) -> String {
    let mut out = String::with_capacity(letters.len() * 2);
    for (i, c) in letters.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}
