//! Public client surface + builder.
//! Endpoint paths and defaults live in `constants`.

mod constants;

use crate::core::PixelError;
pub use constants::{DEFAULT_TIMEOUT, PIXEL_ID_PATH, RANDOM_LINK_PATH};
use constants::USER_AGENT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Where endpoint paths are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiBase {
    /// An explicit API base. Endpoint paths are appended to its path, so a base of
    /// `https://api.example.com/v2` yields `https://api.example.com/v2/api/v1/...`.
    Override(Url),
    /// No API base: endpoint paths are absolute paths on the page's own origin.
    Relative {
        /// The origin (scheme, host, port) of the page that is bootstrapping.
        origin: Url,
    },
}

impl ApiBase {
    /// Resolve an endpoint path (e.g. [`PIXEL_ID_PATH`]) against this base.
    ///
    /// # Errors
    ///
    /// Returns `PixelError::Url` if the combined URL is not valid.
    pub fn resolve(&self, path: &str) -> Result<Url, PixelError> {
        match self {
            Self::Override(base) => {
                let mut joined = base.clone();
                joined.set_query(None);
                joined.set_fragment(None);
                let combined = format!(
                    "{}/{}",
                    joined.as_str().trim_end_matches('/'),
                    path.trim_start_matches('/')
                );
                Ok(Url::parse(&combined)?)
            }
            Self::Relative { origin } => Ok(origin.join(path)?),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PixelClient {
    http: Client,
    base: ApiBase,
}

impl PixelClient {
    /// Create a new builder.
    pub fn builder() -> PixelClientBuilder {
        PixelClientBuilder::default()
    }

    /// The base every endpoint path is resolved against.
    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, PixelError> {
        self.base.resolve(path)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PixelClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    origin: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PixelClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Use an explicit API base (e.g., `https://api.example.com`). Takes precedence over `origin`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Resolve endpoint paths against the page origin instead of an API base.
    /// Any path, query or fragment on `url` is discarded.
    #[must_use]
    pub fn origin(mut self, url: Url) -> Self {
        self.origin = Some(url);
        self
    }

    /// Set the overall request timeout. Default: 15 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none (bounded by the overall timeout).
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `PixelError::Config` when neither a base URL nor an origin was given,
    /// or `PixelError::Http` if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<PixelClient, PixelError> {
        let base = match (self.base_url, self.origin) {
            (Some(base), _) => ApiBase::Override(base),
            (None, Some(mut origin)) => {
                origin.set_path("/");
                origin.set_query(None);
                origin.set_fragment(None);
                ApiBase::Relative { origin }
            }
            (None, None) => {
                return Err(PixelError::Config(
                    "either a base URL or a page origin is required".into(),
                ));
            }
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PixelClient { http, base })
    }
}
