//! The Diceware word list.
//!
//! A fixed, ordered list of 7,776 unique words, one for every possible
//! outcome of five die rolls (6^5). The list is embedded at compile time
//! and validated on load; it is immutable afterwards and shared by
//! reference among the builder and the strength estimator.

use std::collections::HashSet;

use thiserror::Error;

/// Number of words in the list: one per five-roll outcome (6^5).
pub const WORD_COUNT: usize = 7776;

/// Die rolls consumed per word of the passphrase.
pub const DICE_PER_WORD: usize = 5;

/// The built-in word list resource, one word per line.
const EMBEDDED_WORDS: &str = include_str!("words.txt");

/// Errors raised when a word list resource is malformed.
///
/// All of these are fatal to the caller: a process cannot generate
/// passphrases from a broken list.
#[derive(Debug, Clone, Error)]
pub enum WordListError {
    #[error("word list has {found} words, expected {expected}")]
    WrongWordCount { expected: usize, found: usize },
    #[error("word list has an empty entry at line {line}")]
    EmptyWord { line: usize },
    #[error("word list has a duplicate entry {word:?} at line {line}")]
    DuplicateWord { word: String, line: usize },
}

/// An ordered, validated list of exactly [`WORD_COUNT`] unique words.
///
/// Line `i` of the source resource (0-indexed) is the word for index `i`.
/// The list is immutable once constructed.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parses and validates the embedded word list resource.
    pub fn load() -> Result<Self, WordListError> {
        Self::parse(EMBEDDED_WORDS)
    }

    /// Parses a word list from text, one word per line.
    ///
    /// Fails unless the text contains exactly [`WORD_COUNT`] unique,
    /// non-empty entries.
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        let mut words = Vec::with_capacity(WORD_COUNT);
        let mut seen: HashSet<&str> = HashSet::with_capacity(WORD_COUNT);

        for (index, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() {
                return Err(WordListError::EmptyWord { line: index + 1 });
            }
            if !seen.insert(word) {
                return Err(WordListError::DuplicateWord {
                    word: word.to_string(),
                    line: index + 1,
                });
            }
            words.push(word.to_string());
        }

        if words.len() != WORD_COUNT {
            return Err(WordListError::WrongWordCount {
                expected: WORD_COUNT,
                found: words.len(),
            });
        }

        tracing::debug!(words = words.len(), "word list loaded");
        Ok(Self { words })
    }

    /// Returns the word at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, word_count())`. Callers derive
    /// indices from five die rolls, which can never fall outside the
    /// list, so an out-of-range index is a programming error.
    pub fn word_at(&self, index: usize) -> &str {
        match self.words.get(index) {
            Some(word) => word,
            None => panic!(
                "word index {index} out of range for {}-word list",
                self.words.len()
            ),
        }
    }

    /// Returns the number of words in the list.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns true if `word` is present in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
