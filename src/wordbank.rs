use std::fs;
use std::io;
use std::path::Path;

/// Words used whenever the word list file cannot be loaded.
pub const FALLBACK_WORDS: [&str; 5] = ["morning", "bell", "tempt", "bag", "quantity"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word list contains no words")]
    Empty,
}

/// A list of candidate secret words that is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Returns `None` for an empty vector.
    #[must_use]
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    // Always false, kept for clippy's len_without_is_empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Splits comma-separated word list content. Tokens are trimmed and empty
/// tokens (a trailing comma, blank lines) are dropped.
pub fn parse_words(data: &str) -> Vec<String> {
    data.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn try_load_words<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let data = fs::read_to_string(path)?;
    WordList::new(parse_words(&data)).ok_or(LoadError::Empty)
}

/// Loads the word list at `path`, falling back to [`FALLBACK_WORDS`] on any
/// failure so a game can always be started.
pub fn load_words<P: AsRef<Path>>(path: P) -> WordList {
    let path = path.as_ref();
    match try_load_words(path) {
        Ok(words) => {
            log::info!("Loaded {} words from '{}'", words.len(), path.display());
            words
        }
        Err(e) => {
            log::warn!(
                "Could not load word list '{}' ({e}), using built-in words",
                path.display()
            );
            WordList::fallback()
        }
    }
}
