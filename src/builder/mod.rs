//! Passphrase assembly.
//!
//! This module turns a stream of die values into a passphrase: five
//! rolls become a base-6 word index, each index becomes a word, the
//! words become the passphrase. The builder owns the two things that
//! can interrupt that flow, source failure and cancellation, and
//! converts both into explicit outcomes; nothing below it leaks a raw
//! source error to the caller.

mod cancel;

pub use cancel::{cancel_pair, CancelHandle, CancelToken};

use std::fmt;

use crate::estimate::StrengthEstimate;
use crate::source::{DieValue, EntropySource, SourceError};
use crate::wordlist::{WordList, DICE_PER_WORD};

/// Separator between passphrase words.
pub const WORD_SEPARATOR: &str = " ";

/// A generated passphrase: an ordered sequence of list words.
///
/// Displays as the words joined by [`WORD_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passphrase {
    words: Vec<String>,
}

impl Passphrase {
    fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The words of the passphrase, in roll order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the passphrase.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The passphrase as a single string.
    pub fn phrase(&self) -> String {
        self.words.join(WORD_SEPARATOR)
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

/// Terminal result of one generation operation.
///
/// Cancellation is distinct from failure: a cancelled generation has no
/// user-visible error, it simply produced nothing.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The passphrase was assembled, with its strength estimate.
    Complete {
        /// The generated passphrase.
        passphrase: Passphrase,
        /// Time-to-brute-force estimate for the same word count.
        strength: StrengthEstimate,
    },
    /// The entropy source failed; no partial passphrase is ever kept.
    Failed(SourceError),
    /// Cancellation was requested before the passphrase was delivered.
    Cancelled,
}

/// Converts five die values into a word index.
///
/// The rolls are read as a base-6 number, most significant digit first
/// (the first die thrown for the group), each face shifted down to
/// `[0, 5]`: `index = sum((v_i - 1) * 6^(4 - i))`.
pub fn word_index(group: &[DieValue]) -> usize {
    debug_assert_eq!(group.len(), DICE_PER_WORD);
    group
        .iter()
        .fold(0usize, |index, value| index * 6 + usize::from(value.get() - 1))
}

/// Assembles passphrases from an entropy source and a word list.
pub struct PassphraseBuilder<'a> {
    wordlist: &'a WordList,
}

impl<'a> PassphraseBuilder<'a> {
    /// Creates a builder over the given word list.
    pub fn new(wordlist: &'a WordList) -> Self {
        Self { wordlist }
    }

    /// Builds a passphrase of `word_count` words from `source`.
    ///
    /// Requests `word_count * 5` die values in one call, then maps each
    /// ordered group of five to a word. The token is checked before the
    /// source call is issued and again when it resolves; a result that
    /// arrives after cancellation is discarded, never delivered.
    pub async fn build<S: EntropySource>(
        &self,
        word_count: usize,
        source: &S,
        cancel: &mut CancelToken,
    ) -> GenerationOutcome {
        debug_assert!(word_count >= 1);
        let needed = word_count * DICE_PER_WORD;

        if cancel.is_cancelled() {
            tracing::debug!("generation cancelled before requesting rolls");
            return GenerationOutcome::Cancelled;
        }

        let produced = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("generation cancelled while rolls were outstanding");
                return GenerationOutcome::Cancelled;
            }
            produced = source.produce(needed) => produced,
        };

        if cancel.is_cancelled() {
            tracing::debug!("discarding rolls that arrived after cancellation");
            return GenerationOutcome::Cancelled;
        }

        let rolls = match produced {
            Ok(rolls) => rolls,
            Err(err) => {
                tracing::warn!(error = %err, "entropy source failed");
                return GenerationOutcome::Failed(err);
            }
        };
        debug_assert_eq!(rolls.len(), needed);

        let words: Vec<String> = rolls
            .chunks_exact(DICE_PER_WORD)
            .map(|group| self.wordlist.word_at(word_index(group)).to_string())
            .collect();
        let strength = StrengthEstimate::compute(word_count, self.wordlist.word_count());

        tracing::debug!(words = word_count, "passphrase assembled");
        GenerationOutcome::Complete {
            passphrase: Passphrase::from_words(words),
            strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ManualRollSource;
    use crate::wordlist::WORD_COUNT;
    use proptest::prelude::*;

    /// Source that always fails, standing in for a dead remote service.
    struct FailingSource;

    impl EntropySource for FailingSource {
        async fn produce(&self, _count: usize) -> Result<Vec<DieValue>, SourceError> {
            Err(SourceError::RemoteFetch("connection reset".to_string()))
        }
    }

    /// Source whose request never resolves.
    struct PendingSource;

    impl EntropySource for PendingSource {
        async fn produce(&self, _count: usize) -> Result<Vec<DieValue>, SourceError> {
            std::future::pending().await
        }
    }

    fn rolls(faces: &[u8]) -> Vec<DieValue> {
        faces.iter().map(|&f| DieValue::new(f).unwrap()).collect()
    }

    #[test]
    fn test_word_index_anchors() {
        assert_eq!(word_index(&rolls(&[1, 1, 1, 1, 1])), 0);
        assert_eq!(word_index(&rolls(&[1, 1, 1, 1, 2])), 1);
        assert_eq!(word_index(&rolls(&[2, 1, 1, 1, 1])), 1296);
        assert_eq!(word_index(&rolls(&[6, 6, 6, 6, 6])), WORD_COUNT - 1);
    }

    #[tokio::test]
    async fn test_build_from_known_rolls() {
        let wordlist = WordList::load().unwrap();
        let builder = PassphraseBuilder::new(&wordlist);
        let source = ManualRollSource::new(rolls(&[
            1, 1, 1, 1, 1, // index 0
            1, 1, 1, 1, 2, // index 1
            6, 6, 6, 6, 6, // index 7775
        ]));
        let (_handle, mut token) = cancel_pair();

        let outcome = builder.build(3, &source, &mut token).await;

        let GenerationOutcome::Complete { passphrase, .. } = outcome else {
            panic!("expected a completed generation");
        };
        assert_eq!(
            passphrase.words(),
            &[
                wordlist.word_at(0).to_string(),
                wordlist.word_at(1).to_string(),
                wordlist.word_at(WORD_COUNT - 1).to_string(),
            ]
        );
        assert_eq!(
            passphrase.phrase(),
            format!(
                "{} {} {}",
                wordlist.word_at(0),
                wordlist.word_at(1),
                wordlist.word_at(WORD_COUNT - 1)
            )
        );
    }

    #[tokio::test]
    async fn test_every_word_comes_from_the_list() {
        let wordlist = WordList::load().unwrap();
        let builder = PassphraseBuilder::new(&wordlist);
        let source = crate::source::SecureRandomSource::new();
        let (_handle, mut token) = cancel_pair();

        for word_count in [1, 2, 5] {
            let outcome = builder.build(word_count, &source, &mut token).await;
            let GenerationOutcome::Complete { passphrase, .. } = outcome else {
                panic!("expected a completed generation");
            };
            assert_eq!(passphrase.word_count(), word_count);
            for word in passphrase.words() {
                assert!(wordlist.contains(word), "{word:?} not in the list");
            }
        }
    }

    #[tokio::test]
    async fn test_source_failure_yields_failed() {
        let wordlist = WordList::load().unwrap();
        let builder = PassphraseBuilder::new(&wordlist);
        let (_handle, mut token) = cancel_pair();

        let outcome = builder.build(4, &FailingSource, &mut token).await;

        assert!(matches!(
            outcome,
            GenerationOutcome::Failed(SourceError::RemoteFetch(_))
        ));
    }

    #[tokio::test]
    async fn test_cancel_before_build_wins_over_ready_source() {
        let wordlist = WordList::load().unwrap();
        let builder = PassphraseBuilder::new(&wordlist);
        // The source could satisfy the request instantly; cancellation
        // must still take precedence.
        let source = ManualRollSource::new(rolls(&[1, 1, 1, 1, 1]));
        let (handle, mut token) = cancel_pair();

        handle.cancel();
        let outcome = builder.build(1, &source, &mut token).await;

        assert!(matches!(outcome, GenerationOutcome::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_while_request_outstanding() {
        let wordlist = WordList::load().unwrap();
        let builder = PassphraseBuilder::new(&wordlist);
        let (handle, mut token) = cancel_pair();

        let build = builder.build(3, &PendingSource, &mut token);
        let cancel_later = async {
            tokio::task::yield_now().await;
            handle.cancel();
        };
        let (outcome, ()) = tokio::join!(build, cancel_later);

        assert!(matches!(outcome, GenerationOutcome::Cancelled));
    }

    proptest! {
        #[test]
        fn word_index_matches_positional_formula(faces in prop::collection::vec(1u8..=6, 5)) {
            let group: Vec<DieValue> =
                faces.iter().map(|&f| DieValue::new(f).unwrap()).collect();
            let expected: usize = faces
                .iter()
                .enumerate()
                .map(|(i, &f)| (f as usize - 1) * 6usize.pow(4 - i as u32))
                .sum();
            prop_assert_eq!(word_index(&group), expected);
        }

        #[test]
        fn word_index_stays_in_bounds(faces in prop::collection::vec(1u8..=6, 5)) {
            let group: Vec<DieValue> =
                faces.iter().map(|&f| DieValue::new(f).unwrap()).collect();
            prop_assert!(word_index(&group) < WORD_COUNT);
        }
    }
}
