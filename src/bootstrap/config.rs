use std::env;
use std::time::Duration;

use url::Url;

use crate::core::client::DEFAULT_TIMEOUT;

/// Environment variables consulted for the API base, in order.
pub const API_BASE_VARS: [&str; 2] = ["API_BASE", "VITE_API_BASE"];

/// How the bootstrap reaches the backend. Chosen once, at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootProfile {
    /// Endpoints are resolved against a configured API base.
    WithBaseUrlOverride(Url),
    /// Endpoints are resolved against a base path (e.g. `/api`) on the page's own origin.
    WithBasePath(String),
    /// Endpoints are absolute paths on the page's own origin.
    RelativeOnly,
}

/// Bootstrap configuration.
///
/// `profile: None` means analytics is not configured and the bootstrap is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    /// How the backend is reached; `None` skips the bootstrap.
    pub profile: Option<BootProfile>,
    /// Upper bound for the pixel id lookup.
    pub timeout: Duration,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            profile: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BootConfig {
    /// A configuration that talks to the page origin directly.
    pub fn relative_only() -> Self {
        Self {
            profile: Some(BootProfile::RelativeOnly),
            ..Self::default()
        }
    }

    /// A configuration that talks to an explicit API base.
    pub fn with_base_url(base: Url) -> Self {
        Self {
            profile: Some(BootProfile::WithBaseUrlOverride(base)),
            ..Self::default()
        }
    }

    /// A configuration that talks to a base path on the page origin.
    pub fn with_base_path(path: impl Into<String>) -> Self {
        Self {
            profile: Some(BootProfile::WithBasePath(path.into())),
            ..Self::default()
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = dur;
        self
    }

    /// Reads the API base from `API_BASE`, then `VITE_API_BASE`.
    ///
    /// The first variable with a non-empty value wins, and only then is it trimmed,
    /// so a whitespace-only `API_BASE` shadows `VITE_API_BASE` and skips the bootstrap.
    /// An absolute URL selects [`BootProfile::WithBaseUrlOverride`]; anything else is
    /// kept as a base path on the page origin.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let raw = API_BASE_VARS
            .iter()
            .copied()
            .find_map(|name| lookup(name).filter(|v| !v.is_empty()))
            .unwrap_or_default();
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }

        match Url::parse(raw) {
            Ok(base) => Self::with_base_url(base),
            Err(_) => Self::with_base_path(raw),
        }
    }
}
