//! Diceware Passphrase Generation Library
//!
//! Generates passphrases with the Diceware method: five die rolls pick
//! one word out of a fixed 7,776-word list, and the chosen words joined
//! together are the passphrase.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! entropy source → builder → (passphrase, strength estimate) → caller
//!        ↑
//!   secure CSPRNG | remote service | manual rolls
//! ```
//!
//! # Design Principles
//!
//! - **Sources are interchangeable**: one trait covers the local
//!   CSPRNG, the remote entropy service, and manually entered rolls
//! - **Everything after the source is deterministic**: the same rolls
//!   always produce the same passphrase
//! - **Cancellation is an outcome, not an error**: a superseded or
//!   abandoned generation terminates quietly
//! - **No partial results**: a generation either delivers a complete
//!   passphrase or nothing
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use diceware::{
//!     GenerationOutcome, GenerationRequest, GeneratorConfig,
//!     GeneratorSession, SourceSpec, WordList,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let wordlist = Arc::new(WordList::load().unwrap());
//!     let mut session = GeneratorSession::new(wordlist, &GeneratorConfig::default());
//!
//!     let handle = session.start(GenerationRequest {
//!         word_count: 6,
//!         source: SourceSpec::Secure,
//!     });
//!
//!     match handle.outcome().await {
//!         GenerationOutcome::Complete { passphrase, strength } => {
//!             println!("{passphrase}");
//!             println!("time to try every passphrase: {strength}");
//!         }
//!         GenerationOutcome::Failed(err) => eprintln!("generation failed: {err}"),
//!         GenerationOutcome::Cancelled => {}
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod builder;
pub mod config;
pub mod estimate;
pub mod session;
pub mod source;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use builder::{GenerationOutcome, Passphrase, PassphraseBuilder};
pub use config::GeneratorConfig;
pub use estimate::{StrengthEstimate, TimeUnit};
pub use session::{GenerationHandle, GenerationRequest, GeneratorSession, SourceSpec};
pub use source::{
    DieValue, EntropySource, ManualRollSource, RemoteEntropySource, SecureRandomSource,
    SourceError,
};
pub use wordlist::{WordList, DICE_PER_WORD, WORD_COUNT};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
