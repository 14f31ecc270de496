//! Result types produced by the executor

pub mod types;

pub use types::{HeaderFields, RequestResult, Response};
