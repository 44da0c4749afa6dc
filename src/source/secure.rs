//! Local CSPRNG entropy source.
//!
//! Draws die values from a ChaCha20 CSPRNG seeded by the operating
//! system. This is the default source: no network, no user interaction,
//! and cryptographically secure as long as the OS entropy pool is.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use super::{DieValue, EntropySource, SourceError};

/// Entropy source backed by an OS-seeded ChaCha20 CSPRNG.
///
/// Produces independent, uniformly distributed die values. Seeding
/// failure means the platform has no usable entropy at all, which is
/// not a recoverable condition.
#[derive(Debug, Default)]
pub struct SecureRandomSource;

impl SecureRandomSource {
    pub fn new() -> Self {
        Self
    }

    /// Draws one uniformly distributed die value.
    ///
    /// Takes three bits per draw and rejects the two values outside the
    /// face range, so every face stays equally likely (no modulo bias).
    fn roll(rng: &mut ChaCha20Rng) -> DieValue {
        loop {
            let candidate = (rng.next_u32() & 0b111) as u8 + 1;
            if let Some(value) = DieValue::new(candidate) {
                return value;
            }
        }
    }
}

impl EntropySource for SecureRandomSource {
    async fn produce(&self, count: usize) -> Result<Vec<DieValue>, SourceError> {
        let mut rng = ChaCha20Rng::from_entropy();
        let mut rolls = Vec::with_capacity(count);
        while rolls.len() < count {
            rolls.push(Self::roll(&mut rng));
        }
        tracing::trace!(count, "produced die values from local CSPRNG");
        Ok(rolls)
    }
}
