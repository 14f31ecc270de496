//! Fixed transport policy applied to every round trip
//!
//! None of these values can be overridden per call.

use std::time::Duration;

/// Time allowed to establish the connection (including the TLS handshake)
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Longest silence allowed between reads once connected, response head included
pub const READ_TIMEOUT: Duration = Duration::from_millis(5000);

/// Browser-like identity sent unless the caller supplies its own
pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36 Edg/110.0.1587.50";

/// Value of the default `Connection` header
pub const KEEP_ALIVE: &str = "Keep-Alive";

/// `Content-Type` sent with a written body unless the caller supplies one
pub const DEFAULT_POST_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
