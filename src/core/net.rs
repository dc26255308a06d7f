use serde_json::Value;

use crate::payload;

/// Read the response body and decode it into a loosely typed payload.
///
/// Bodies that are not JSON are handed over as a plain string value.
pub(crate) async fn get_payload(resp: reqwest::Response, _endpoint: &str) -> Result<Value, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(endpoint = _endpoint, bytes = text.len(), "received payload");

    Ok(payload::parse_body(&text))
}

/// Map a non-2xx response to `PixelError::Status`.
pub(crate) fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, crate::PixelError> {
    if !resp.status().is_success() {
        return Err(crate::PixelError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}
