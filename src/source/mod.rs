//! Entropy sources for die rolls.
//!
//! This module provides a trait-based abstraction over the producers of
//! random die values, allowing the local CSPRNG, a remote entropy
//! service, and manually entered physical rolls to be used
//! interchangeably. A source produces [`DieValue`]s and nothing else;
//! everything downstream of the source boundary is deterministic.

mod manual;
mod remote;
mod secure;

pub use manual::ManualRollSource;
pub use remote::RemoteEntropySource;
pub use secure::SecureRandomSource;

use std::future::Future;

use thiserror::Error;

/// A single die-roll outcome, always in `[1, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DieValue(u8);

/// Error for integers outside the die face range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("die value {0} is not in 1..=6")]
pub struct InvalidDieValue(pub u8);

impl DieValue {
    /// Number of faces on the die.
    pub const SIDES: u8 = 6;

    /// Constructs a die value, returning `None` outside `[1, 6]`.
    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::SIDES).contains(&value).then_some(Self(value))
    }

    /// Returns the face value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieValue {
    type Error = InvalidDieValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDieValue(value))
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur while producing die values.
///
/// These are recoverable: the builder converts them into a failed
/// generation outcome and the caller decides whether to issue a fresh
/// request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("failed to fetch remote entropy: {0}")]
    RemoteFetch(String),
    #[error("unusable remote entropy response: {0}")]
    RemoteParse(String),
    #[error("insufficient die rolls: got {got}, need {need}")]
    InsufficientRolls { got: usize, need: usize },
}

/// Trait for die-roll producers.
///
/// A source produces exactly `count` values in a single call, or fails.
/// The remote variant is the only one that actually suspends; the local
/// CSPRNG and manual variants complete immediately.
pub trait EntropySource {
    /// Produces exactly `count` die values, in roll order.
    fn produce(
        &self,
        count: usize,
    ) -> impl Future<Output = Result<Vec<DieValue>, SourceError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_value_accepts_faces() {
        for face in 1..=6 {
            assert_eq!(DieValue::new(face).unwrap().get(), face);
        }
    }

    #[test]
    fn test_die_value_rejects_out_of_range() {
        assert!(DieValue::new(0).is_none());
        assert!(DieValue::new(7).is_none());
        assert_eq!(DieValue::try_from(9), Err(InvalidDieValue(9)));
    }
}
