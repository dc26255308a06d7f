use serde::Serialize;

use crate::{
    core::{PixelClient, PixelError, client::PIXEL_ID_PATH, net},
    payload,
};

#[derive(Serialize)]
struct ByTypeQuery<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    page_type: Option<&'a str>,
}

pub(super) async fn fetch_pixel_id(
    client: &PixelClient,
    page_type: Option<&str>,
) -> Result<String, PixelError> {
    let url = client.endpoint(PIXEL_ID_PATH)?;

    let resp = client
        .http()
        .get(url)
        .query(&ByTypeQuery { page_type })
        .send()
        .await?;
    let resp = net::ensure_success(resp)?;

    let body = net::get_payload(resp, "pixel_id").await?;
    Ok(payload::pick_pixel_id(&body))
}
