//! Core data types returned by a round trip
//!
//! [`IndexMap`] keeps response header names in the order the server first
//! sent them, and each name keeps its values in arrival order.

use indexmap::IndexMap;

use crate::errors::TransportFailure;

/// Response headers - lowercase header name to every value, in the order received
pub type HeaderFields = IndexMap<String, Vec<String>>;

/// The successful part of a round trip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Reassembled body text, `None` when it was not requested
    pub body: Option<String>,
    /// Captured headers, `None` when they were not requested
    pub headers: Option<HeaderFields>,
}

/// Outcome of one request attempt.
///
/// Either a success carrying whatever the caller asked for, or a failure
/// carrying only the error. A failed attempt never exposes partial data.
#[derive(Debug)]
pub struct RequestResult {
    outcome: std::result::Result<Response, TransportFailure>,
}

impl RequestResult {
    pub fn success(body: Option<String>, headers: Option<HeaderFields>) -> Self {
        Self {
            outcome: Ok(Response { body, headers }),
        }
    }

    pub fn failure(error: TransportFailure) -> Self {
        Self { outcome: Err(error) }
    }

    /// Response body text, present only on success when it was requested
    pub fn body(&self) -> Option<&str> {
        self.outcome.as_ref().ok().and_then(|r| r.body.as_deref())
    }

    /// Response headers, present only on success when they were requested
    pub fn headers(&self) -> Option<&HeaderFields> {
        self.outcome.as_ref().ok().and_then(|r| r.headers.as_ref())
    }

    /// All values of one response header, looked up case-insensitively
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        let wanted = name.to_ascii_lowercase();
        self.headers()
            .and_then(|h| h.get(&wanted))
            .map(Vec::as_slice)
    }

    pub fn error(&self) -> Option<&TransportFailure> {
        self.outcome.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn is_err(&self) -> bool {
        self.outcome.is_err()
    }

    pub fn into_result(self) -> std::result::Result<Response, TransportFailure> {
        self.outcome
    }
}

impl From<std::result::Result<Response, TransportFailure>> for RequestResult {
    fn from(outcome: std::result::Result<Response, TransportFailure>) -> Self {
        Self { outcome }
    }
}
