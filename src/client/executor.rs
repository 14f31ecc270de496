//! Request execution
//!
//! Every public entry point ends up in [`RequestExecutor::send`], which runs
//! one round trip in a fixed order: apply headers, write the body (POST
//! only), capture headers if asked, read the body if asked. Any failure
//! along the way is turned into a [`RequestResult`] at the outermost
//! boundary and never propagated.
//!
//! The transport is async; each executor drives it on its own
//! current-thread tokio runtime so callers see a plain blocking call.

use std::sync::Arc;
use std::thread;

use once_cell::sync::OnceCell;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, CONNECTION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Client, Response as TransportResponse};
use tokio::runtime::{Builder as RuntimeBuilder, Handle, Runtime};
use tracing::{debug, warn};
use url::Url;

use crate::client::body::{charset_from_headers, decode, reassemble_lines};
use crate::client::policy::{
    CONNECT_TIMEOUT, DEFAULT_POST_CONTENT_TYPE, KEEP_ALIVE, READ_TIMEOUT, USER_AGENT_STRING,
};
use crate::errors::{Result, TransportFailure};
use crate::http::Method;
use crate::models::{HeaderFields, RequestResult, Response};
use crate::request::{RequestHeaders, RequestOptions};

/// Executor behind the free [`execute`] function, built on first use
static DEFAULT_EXECUTOR: OnceCell<RequestExecutor> = OnceCell::new();

/// Run one round trip on the shared secure executor.
///
/// Only `https://` URLs are accepted. Holding no per-call state, this is safe
/// to call from any number of threads or async tasks at once; the transport
/// may reuse an idle keep-alive connection between calls to the same host.
/// Called from inside an async runtime, it blocks that worker until done.
pub fn execute(method: Method, url: &str, options: &RequestOptions) -> RequestResult {
    match DEFAULT_EXECUTOR.get_or_try_init(RequestExecutor::new) {
        Ok(executor) => executor.execute(method, url, options),
        Err(err) => {
            warn!(error = %err, "Failed to initialise transport");
            RequestResult::failure(err)
        }
    }
}

/// Runtime that may be dropped from any context, async or not
#[derive(Debug)]
struct TransportRuntime(Option<Runtime>);

impl TransportRuntime {
    fn get(&self) -> Result<&Runtime> {
        self.0
            .as_ref()
            .ok_or_else(|| TransportFailure::new("Transport runtime is shut down"))
    }
}

impl Drop for TransportRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            runtime.shutdown_background();
        }
    }
}

/// Owns one transport client and runs round trips on it
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: Client,
    runtime: Arc<TransportRuntime>,
}

impl RequestExecutor {
    /// Executor that only accepts `https://` URLs
    pub fn new() -> Result<Self> {
        Self::build(true)
    }

    /// Executor that also accepts plain `http://` URLs
    pub fn plain_http_allowed() -> Result<Self> {
        Self::build(false)
    }

    fn build(https_only: bool) -> Result<Self> {
        // HTTP/1.1 only so the Connection header keeps its meaning
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .http1_only()
            .https_only(https_only)
            .build()?;

        let runtime = RuntimeBuilder::new_current_thread().enable_all().build()?;

        Ok(Self {
            client,
            runtime: Arc::new(TransportRuntime(Some(runtime))),
        })
    }

    /// Run one round trip. Never panics on transport problems and never
    /// returns partial data: a failure at any step discards what was read.
    pub fn execute(&self, method: Method, url: &str, options: &RequestOptions) -> RequestResult {
        let outcome = if Handle::try_current().is_ok() {
            // A runtime cannot be blocked on from inside another one
            thread::scope(|scope| {
                scope
                    .spawn(|| self.run(method, url, options))
                    .join()
                    .unwrap_or_else(|_| Err(TransportFailure::new("Request thread panicked")))
            })
        } else {
            self.run(method, url, options)
        };

        match outcome {
            Ok(response) => RequestResult::from(Ok(response)),
            Err(err) => {
                warn!(method = %method, endpoint = %log_target(url), error = %err, "Request failed");
                RequestResult::failure(err)
            }
        }
    }

    fn run(&self, method: Method, url: &str, options: &RequestOptions) -> Result<Response> {
        self.runtime.get()?.block_on(self.send(method, url, options))
    }

    async fn send(&self, method: Method, url: &str, options: &RequestOptions) -> Result<Response> {
        let url = Url::parse(url)?;

        let body = options.body.as_ref().filter(|_| method.allows_body());
        let headers = build_headers(&options.headers, body.is_some())?;

        let mut request = self.client.request(method.into(), url.clone()).headers(headers);
        if let Some(bytes) = body {
            request = request.body(bytes.clone());
        }

        debug!(
            method = %method,
            url = %url,
            body_len = body.map_or(0, Vec::len),
            "Sending request"
        );

        let response = request.send().await?;
        debug!(status = response.status().as_u16(), url = %response.url(), "Response received");

        let headers = options
            .want_headers
            .then(|| collect_headers(response.headers()));

        let body = if options.want_body {
            Some(read_body(response).await?)
        } else {
            None
        };

        Ok(Response { body, headers })
    }
}

/// Host and path of a URL, without credentials or query, for failure logs
fn log_target(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => format!("{}{}", parsed.host_str().unwrap_or(""), parsed.path()),
        Err(_) => "<invalid url>".to_string(),
    }
}

/// Defaults first, then caller headers so same-named entries win.
///
/// A written body without a caller `Content-Type` is labelled as form data.
pub(crate) fn build_headers(custom: &RequestHeaders, writes_body: bool) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static(KEEP_ALIVE));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));

    for (name, value) in custom {
        let name = HeaderName::try_from(name.as_str())?;
        let value = HeaderValue::try_from(value.as_str())?;
        headers.insert(name, value);
    }

    if writes_body && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_POST_CONTENT_TYPE));
    }

    Ok(headers)
}

/// Every header name mapped to all of its values, in the order received
pub(crate) fn collect_headers(headers: &HeaderMap) -> HeaderFields {
    let mut fields = HeaderFields::with_capacity(headers.keys_len());
    for (name, value) in headers {
        fields
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    fields
}

/// Consume the response body and rebuild it line by line.
///
/// An error status fails here, mirroring a transport that refuses to open
/// the body stream of an error response.
async fn read_body(response: TransportResponse) -> Result<String> {
    let response = response.error_for_status()?;
    let encoding = charset_from_headers(response.headers());
    let bytes = response.bytes().await?;
    Ok(reassemble_lines(&decode(&bytes, encoding)))
}
