//! HTTP client functionality

pub mod body;
pub mod executor;
pub mod policy;

// Re-exports
pub use executor::{execute, RequestExecutor};
pub use policy::{CONNECT_TIMEOUT, READ_TIMEOUT, USER_AGENT_STRING};
