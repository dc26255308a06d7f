use serde::Serialize;

use crate::{
    core::{PixelClient, PixelError, client::RANDOM_LINK_PATH, net},
    payload,
};

#[derive(Serialize)]
struct RandomQuery<'a> {
    #[serde(rename = "type")]
    link_type: &'a str,
}

pub(super) async fn fetch_random_link(
    client: &PixelClient,
    link_type: Option<&str>,
) -> Result<String, PixelError> {
    let url = client.endpoint(RANDOM_LINK_PATH)?;

    let mut req = client.http().get(url);
    if let Some(link_type) = link_type.filter(|t| !t.is_empty()) {
        req = req.query(&RandomQuery { link_type });
    }

    let resp = net::ensure_success(req.send().await?)?;
    let body = net::get_payload(resp, "random_link").await?;

    let link = payload::pick_url(&body);
    if link.is_empty() {
        return Err(PixelError::EmptyLink);
    }
    Ok(link)
}
