//! Centralized constants for endpoint paths, timeout and UA.

use std::time::Duration;

/// Identifies this crate to the backend.
pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Upper bound for a single request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Tracking pixel id lookup, keyed by page type.
pub const PIXEL_ID_PATH: &str = "/api/v1/fb_token/by_type";

/// Random redirect link lookup, optionally keyed by type.
pub const RANDOM_LINK_PATH: &str = "/api/v1/links/random";
