//! Generator configuration.
//!
//! Covers the two things worth configuring outside the code: where the
//! remote entropy service lives, and the default passphrase length.
//! Loaded from a TOML file; every section falls back to defaults when
//! absent.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder in the remote URL template replaced by the number of
/// die values to fetch.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Default remote endpoint: random.org's integer generator, plain-text
/// output, one value in `[1, 6]` per line.
pub const DEFAULT_REMOTE_URL: &str =
    "https://www.random.org/integers/?num={count}&min=1&max=6&col=1&base=10&format=plain&rnd=new";

/// Remote entropy service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Endpoint template; must contain [`COUNT_PLACEHOLDER`].
    pub url_template: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_REMOTE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Passphrase defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassphraseConfig {
    /// Word count used when the caller does not specify one.
    pub default_words: usize,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self { default_words: 6 }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Remote entropy service settings.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Passphrase defaults.
    #[serde(default)]
    pub passphrase: PassphraseConfig,
}

/// Configuration validation and loading errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("remote url template is missing the {COUNT_PLACEHOLDER} placeholder")]
    MissingCountPlaceholder,
    #[error("remote timeout must be nonzero")]
    InvalidTimeout,
    #[error("default word count must be at least 1")]
    InvalidWordCount,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

impl GeneratorConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: GeneratorConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.remote.url_template.contains(COUNT_PLACEHOLDER) {
            return Err(ConfigError::MissingCountPlaceholder);
        }
        if self.remote.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.passphrase.default_words == 0 {
            return Err(ConfigError::InvalidWordCount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.passphrase.default_words, 6);
    }

    #[test]
    fn test_template_without_placeholder_invalid() {
        let mut config = GeneratorConfig::default();
        config.remote.url_template = "https://example.com/integers".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingCountPlaceholder)
        ));
    }

    #[test]
    fn test_zero_timeout_invalid() {
        let mut config = GeneratorConfig::default();
        config.remote.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_zero_word_count_invalid() {
        let mut config = GeneratorConfig::default();
        config.passphrase.default_words = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWordCount)
        ));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            [passphrase]
            default_words = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.passphrase.default_words, 8);
        assert_eq!(config.remote.url_template, DEFAULT_REMOTE_URL);
        assert!(config.validate().is_ok());
    }
}
