//! Common test utilities for simple-https integration tests
//!
//! This module provides shared test infrastructure including:
//! - Log capture through tracing-subscriber
//! - Running the executor from async wiremock tests
//! - A local listener that accepts connections but never answers

#![allow(dead_code)]

use std::net::TcpListener;

use simple_https::{Method, RequestExecutor, RequestOptions, RequestResult};

/// Multi-line body served by the mock endpoints
pub const MULTILINE_BODY: &str = "first line\r\nsecond line\nthird line";

/// What [`MULTILINE_BODY`] looks like once reassembled
pub const MULTILINE_EXPECTED: &str = "first line\nsecond line\nthird line\n";

/// Install a test-writer subscriber once; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Run one request on a plain-http executor straight from an async test
pub async fn send(method: Method, url: String, options: RequestOptions) -> RequestResult {
    init_tracing();
    let executor = RequestExecutor::plain_http_allowed().expect("Failed to build executor");
    executor.execute(method, &url, &options)
}

/// Blocking variant for tests that do not need a mock server
pub fn send_blocking(method: Method, url: &str, options: RequestOptions) -> RequestResult {
    init_tracing();
    let executor = RequestExecutor::plain_http_allowed().expect("Failed to build executor");
    executor.execute(method, url, &options)
}

/// A bound listener whose connections are never read from or answered
pub fn silent_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Listener has no address");
    (listener, format!("http://{}/slow", addr))
}

/// A local URL nothing is listening on
pub fn refused_url() -> String {
    refused_url_with_scheme("http")
}

/// A local URL with the given scheme that nothing is listening on
pub fn refused_url_with_scheme(scheme: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("{}://{}/gone", scheme, addr)
}
