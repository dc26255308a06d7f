use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PixelError {
    /// An error occurred during an HTTP request, including the request timing out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The link endpoint answered, but no link could be extracted from its payload.
    #[error("Empty link from API.")]
    EmptyLink,

    /// The client or bootstrap configuration is incomplete or invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
