//! Generation orchestration.
//!
//! A [`GeneratorSession`] sequences "produce rolls from source X, build
//! the passphrase, estimate its strength" as a single asynchronous,
//! cancellable operation. At most one generation is in flight per
//! session: starting a new one first cancels the previous one, so two
//! operations can never race for the same display target.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::builder::{cancel_pair, CancelHandle, GenerationOutcome, PassphraseBuilder};
use crate::config::GeneratorConfig;
use crate::source::{DieValue, ManualRollSource, RemoteEntropySource, SecureRandomSource};
use crate::wordlist::WordList;

/// Which entropy source a generation request draws from.
///
/// Debug is deliberately not derived: manual rolls are secret material.
#[derive(Clone)]
pub enum SourceSpec {
    /// The local OS-seeded CSPRNG.
    Secure,
    /// The configured remote entropy service.
    Remote,
    /// Pre-collected physical die rolls.
    Manual(Vec<DieValue>),
}

impl SourceSpec {
    /// Short name for logging.
    fn label(&self) -> &'static str {
        match self {
            SourceSpec::Secure => "secure-random",
            SourceSpec::Remote => "remote",
            SourceSpec::Manual(_) => "manual-rolls",
        }
    }
}

/// A request for one passphrase. Consumed by [`GeneratorSession::start`].
#[derive(Clone)]
pub struct GenerationRequest {
    /// Number of words in the passphrase; must be at least 1.
    pub word_count: usize,
    /// Where the die rolls come from.
    pub source: SourceSpec,
}

/// Handle to one in-flight generation.
pub struct GenerationHandle {
    cancel: CancelHandle,
    task: JoinHandle<GenerationOutcome>,
}

impl GenerationHandle {
    /// Requests cooperative cancellation of this generation.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns true if cancellation has been requested.
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel.is_cancel_requested()
    }

    /// Returns a cancel handle usable from another task.
    pub fn canceller(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Waits for the generation to finish.
    pub async fn outcome(self) -> GenerationOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => GenerationOutcome::Cancelled,
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

/// Runs generations against a shared word list and a configured remote
/// endpoint.
pub struct GeneratorSession {
    wordlist: Arc<WordList>,
    remote: RemoteEntropySource,
    active: Option<CancelHandle>,
}

impl GeneratorSession {
    /// Creates a session over an already-validated word list.
    pub fn new(wordlist: Arc<WordList>, config: &GeneratorConfig) -> Self {
        Self {
            wordlist,
            remote: RemoteEntropySource::new(&config.remote),
            active: None,
        }
    }

    /// Starts a generation, cancelling any still-running previous one.
    ///
    /// The returned handle is the only way to observe the outcome; the
    /// session keeps just enough to cancel the operation when it is
    /// superseded.
    pub fn start(&mut self, request: GenerationRequest) -> GenerationHandle {
        if let Some(previous) = self.active.take() {
            previous.cancel();
        }

        let GenerationRequest { word_count, source } = request;
        tracing::info!(word_count, source = source.label(), "starting generation");

        let (handle, mut token) = cancel_pair();
        let wordlist = Arc::clone(&self.wordlist);
        let remote = self.remote.clone();

        let task = tokio::spawn(async move {
            let builder = PassphraseBuilder::new(&wordlist);
            match source {
                SourceSpec::Secure => {
                    builder
                        .build(word_count, &SecureRandomSource::new(), &mut token)
                        .await
                }
                SourceSpec::Remote => builder.build(word_count, &remote, &mut token).await,
                SourceSpec::Manual(rolls) => {
                    builder
                        .build(word_count, &ManualRollSource::new(rolls), &mut token)
                        .await
                }
            }
        });

        self.active = Some(handle.clone());
        GenerationHandle {
            cancel: handle,
            task,
        }
    }

    /// Cancels the active generation, if any.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancel();
            tracing::debug!("cancelled active generation");
        }
    }
}
