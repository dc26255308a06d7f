mod api;

use crate::{PixelClient, PixelError};

/// Fetches a random redirect link, optionally restricted to a type.
///
/// # Errors
///
/// Returns `PixelError::EmptyLink` when the response carries no link, and other
/// `PixelError` variants on network failure, timeout, or a non-2xx response.
pub async fn fetch_random_link(
    client: &PixelClient,
    link_type: Option<&str>,
) -> Result<String, PixelError> {
    api::fetch_random_link(client, link_type).await
}

/// A builder for the random link lookup.
#[derive(Debug, Clone)]
pub struct RandomLinkBuilder {
    client: PixelClient,
    link_type: Option<String>,
}

impl RandomLinkBuilder {
    /// Creates a new `RandomLinkBuilder` without a type filter.
    pub fn new(client: &PixelClient) -> Self {
        Self {
            client: client.clone(),
            link_type: None,
        }
    }

    /// Restricts the lookup to a type. An empty type is treated as no filter.
    #[must_use]
    pub fn link_type(mut self, link_type: impl Into<String>) -> Self {
        self.link_type = Some(link_type.into());
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// See [`fetch_random_link`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(link_type = ?self.link_type)))]
    pub async fn fetch(self) -> Result<String, PixelError> {
        api::fetch_random_link(&self.client, self.link_type.as_deref()).await
    }
}
