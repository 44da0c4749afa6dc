//! Manually entered physical die rolls.
//!
//! Wraps a pre-collected sequence of rolls supplied by the caller, who
//! is responsible for collecting and validating them (the original
//! workflow: roll real dice, type the values in). The source never
//! prompts for input itself.

use super::{DieValue, EntropySource, SourceError};

/// Entropy source over a pre-collected sequence of physical rolls.
#[derive(Clone, Default)]
pub struct ManualRollSource {
    rolls: Vec<DieValue>,
}

impl ManualRollSource {
    /// Wraps the given rolls, in the order they were thrown.
    pub fn new(rolls: Vec<DieValue>) -> Self {
        Self { rolls }
    }

    /// Returns the number of collected rolls.
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Returns true if no rolls were collected.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

impl EntropySource for ManualRollSource {
    async fn produce(&self, count: usize) -> Result<Vec<DieValue>, SourceError> {
        if self.rolls.len() < count {
            return Err(SourceError::InsufficientRolls {
                got: self.rolls.len(),
                need: count,
            });
        }
        // Rolls beyond `count` are ignored: the caller collects up
        // front and the passphrase consumes exactly what it needs.
        Ok(self.rolls[..count].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolls(faces: &[u8]) -> Vec<DieValue> {
        faces.iter().map(|&f| DieValue::new(f).unwrap()).collect()
    }

    #[tokio::test]
    async fn test_exact_supply_preserves_order() {
        let source = ManualRollSource::new(rolls(&[3, 1, 4, 1, 5]));
        let produced = source.produce(5).await.unwrap();

        let faces: Vec<u8> = produced.iter().map(|v| v.get()).collect();
        assert_eq!(faces, vec![3, 1, 4, 1, 5]);
    }

    #[tokio::test]
    async fn test_shortfall_fails() {
        let source = ManualRollSource::new(rolls(&[1, 2, 3]));
        let err = source.produce(5).await.unwrap_err();

        assert_eq!(err, SourceError::InsufficientRolls { got: 3, need: 5 });
    }

    #[tokio::test]
    async fn test_surplus_is_ignored() {
        let source = ManualRollSource::new(rolls(&[6, 6, 6, 1, 1]));
        let produced = source.produce(3).await.unwrap();

        assert_eq!(produced.len(), 3);
        assert!(produced.iter().all(|v| v.get() == 6));
    }
}
