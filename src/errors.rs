//! Error types for simple-https
//!
//! Every failure of a round trip collapses into [`TransportFailure`]. DNS,
//! refused connections, TLS negotiation, timeouts, error statuses and
//! malformed URLs are not told apart: callers only look at whether a
//! [`RequestResult`](crate::RequestResult) carries an error.

use std::error::Error as StdError;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The single failure kind reported by the executor
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportFailure {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportFailure {
    /// Failure with a plain message and no underlying cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Failure wrapping an underlying error; the message is the flattened cause chain
    pub fn from_source<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: chain_message(&err),
            source: Some(Box::new(err)),
        }
    }

    /// Human-readable failure detail
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Join an error and all of its sources with `": "`, skipping repeats.
///
/// reqwest's top-level message ("error sending request for url ...") hides
/// the interesting part (refused, timed out, certificate) in its sources.
fn chain_message(err: &(dyn StdError + 'static)) -> String {
    let mut parts: Vec<String> = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if parts.last().map_or(true, |last| !last.contains(&text)) {
            parts.push(text);
        }
        current = cause.source();
    }
    parts.join(": ")
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::from_source(err)
    }
}

impl From<url::ParseError> for TransportFailure {
    fn from(err: url::ParseError) -> Self {
        Self {
            message: format!("Invalid URL: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<std::io::Error> for TransportFailure {
    fn from(err: std::io::Error) -> Self {
        Self::from_source(err)
    }
}

impl From<reqwest::header::InvalidHeaderName> for TransportFailure {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        Self {
            message: format!("Invalid header name: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for TransportFailure {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self {
            message: format!("Invalid header value: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransportFailure>;
