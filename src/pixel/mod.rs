mod api;

use crate::{PixelClient, PixelError};

/// Resolves the tracking pixel identifier for a page type.
///
/// A successful response without a recognizable identifier yields `Ok("")`.
///
/// # Errors
///
/// Returns `PixelError` on network failure, timeout, or a non-2xx response.
pub async fn fetch_pixel_id(
    client: &PixelClient,
    page_type: Option<&str>,
) -> Result<String, PixelError> {
    api::fetch_pixel_id(client, page_type).await
}

/// A builder for the pixel identifier lookup.
#[derive(Debug, Clone)]
pub struct PixelIdBuilder {
    client: PixelClient,
    page_type: Option<String>,
}

impl PixelIdBuilder {
    /// Creates a new `PixelIdBuilder` without a page type.
    pub fn new(client: &PixelClient) -> Self {
        Self {
            client: client.clone(),
            page_type: None,
        }
    }

    /// Sets the page type sent as the `type` query parameter.
    /// An empty page type is still sent (as `type=`).
    #[must_use]
    pub fn page_type(mut self, page_type: impl Into<String>) -> Self {
        self.page_type = Some(page_type.into());
        self
    }

    /// Executes the request and extracts the identifier, untrimmed.
    ///
    /// # Errors
    ///
    /// Returns `PixelError` on network failure, timeout, or a non-2xx response.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(page_type = ?self.page_type)))]
    pub async fn fetch(self) -> Result<String, PixelError> {
        api::fetch_pixel_id(&self.client, self.page_type.as_deref()).await
    }
}
