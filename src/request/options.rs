//! Per-call request options
//!
//! One struct with defaults replaces the pile of overloads a caller would
//! otherwise choose from: headers, an optional body, and which parts of the
//! response to materialize.

use indexmap::IndexMap;

/// Caller-supplied request headers - name to value, in insertion order
pub type RequestHeaders = IndexMap<String, String>;

/// Options for a single round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Headers applied after the built-in defaults; same-named entries replace them
    pub headers: RequestHeaders,
    /// Bytes written as the request body (POST only). An empty `Some` is still written.
    pub body: Option<Vec<u8>>,
    /// Read and return the response body
    pub want_body: bool,
    /// Capture and return the response headers
    pub want_headers: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            headers: RequestHeaders::new(),
            body: None,
            want_body: true,
            want_headers: false,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header, replacing any earlier entry whose name matches case-insensitively
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    /// Add several headers, in iteration order
    pub fn headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        headers
            .into_iter()
            .fold(self, |opts, (name, value)| opts.header(name, value))
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn want_body(mut self, want: bool) -> Self {
        self.want_body = want;
        self
    }

    pub fn want_headers(mut self, want: bool) -> Self {
        self.want_headers = want;
        self
    }
}
