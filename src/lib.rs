//! simple-https library interface
//!
//! A thin blocking layer over a secure HTTP transport: one GET or POST per
//! call, optional custom headers and body, and a choice of whether the
//! response body and/or headers are materialized.
//!
//! ```no_run
//! use simple_https::{execute, Method, RequestOptions};
//!
//! let result = execute(
//!     Method::Get,
//!     "https://example.com/",
//!     &RequestOptions::new().want_headers(true),
//! );
//! match result.error() {
//!     None => println!("{}", result.body().unwrap_or_default()),
//!     Some(err) => eprintln!("request failed: {}", err),
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`client`] - The executor and its fixed transport policy
//! - [`request`] - Per-call options (RequestOptions)
//! - [`models`] - Results (RequestResult, HeaderFields)
//! - [`errors`] - The single failure kind (TransportFailure)
//! - [`http`] - Supported methods (Method)

pub mod client;
pub mod errors;
pub mod http;
pub mod models;
pub mod request;

pub use client::{execute, RequestExecutor};
pub use errors::{Result, TransportFailure};
pub use http::Method;
pub use models::{HeaderFields, RequestResult, Response};
pub use request::{RequestHeaders, RequestOptions};
