//! Remote entropy service source.
//!
//! Fetches true-random die values from an HTTP service in a single GET
//! request. The response body is plain UTF-8 text, one integer per
//! line, exactly as many lines as values requested. This call is the
//! only suspension point in the whole generation pipeline.
//!
//! Transport and parse failures are surfaced as recoverable
//! [`SourceError`]s; retry policy is the caller's business.

use std::time::Duration;

use crate::config::{RemoteConfig, COUNT_PLACEHOLDER};

use super::{DieValue, EntropySource, SourceError};

/// Entropy source backed by a remote true-random service.
///
/// Holds the endpoint template and a reusable HTTP client. Cloning is
/// cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RemoteEntropySource {
    client: reqwest::Client,
    url_template: String,
}

impl RemoteEntropySource {
    /// Creates a source for the configured endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, which is the
    /// same unrecoverable condition `reqwest::Client::new` panics on.
    pub fn new(config: &RemoteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to construct HTTP client");
        Self {
            client,
            url_template: config.url_template.clone(),
        }
    }
}

impl EntropySource for RemoteEntropySource {
    async fn produce(&self, count: usize) -> Result<Vec<DieValue>, SourceError> {
        let url = self
            .url_template
            .replace(COUNT_PLACEHOLDER, &count.to_string());
        tracing::debug!(%url, count, "requesting die values from remote service");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| SourceError::RemoteFetch(err.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|err| SourceError::RemoteFetch(err.to_string()))?;

        parse_die_values(&body, count)
    }
}

/// Parses a newline-delimited response body into exactly `count` die
/// values.
///
/// Every line must parse as an integer in `[1, 6]`. An out-of-range
/// value would silently corrupt the word-index computation downstream,
/// so it is rejected here rather than trusted.
fn parse_die_values(body: &str, count: usize) -> Result<Vec<DieValue>, SourceError> {
    let mut rolls = Vec::with_capacity(count);

    for (index, line) in body.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let value: u8 = token.parse().map_err(|_| {
            SourceError::RemoteParse(format!("line {}: not an integer: {token:?}", index + 1))
        })?;
        let roll = DieValue::new(value).ok_or_else(|| {
            SourceError::RemoteParse(format!("line {}: value {value} is not in 1..=6", index + 1))
        })?;
        rolls.push(roll);
    }

    if rolls.len() != count {
        return Err(SourceError::RemoteParse(format!(
            "expected {count} values, got {}",
            rolls.len()
        )));
    }

    Ok(rolls)
}
