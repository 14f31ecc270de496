//! Request options
//!
//! Provides the per-call configuration handed to the executor.

mod options;

pub use options::{RequestHeaders, RequestOptions};
