use crate::common::{client_for, mock_pixel, setup_server};
use pagepixel::{PixelIdBuilder, fetch_pixel_id};

#[tokio::test]
async fn pixel_id_from_top_level_field() {
    let server = setup_server();
    let mock = mock_pixel(&server, "share", r#"{"pixelId":"1234567890"}"#);

    let client = client_for(&server);
    let id = fetch_pixel_id(&client, Some("share")).await.unwrap();

    mock.assert();
    assert_eq!(id, "1234567890");
}

#[tokio::test]
async fn pixel_id_unwrapped_from_data_envelope() {
    let server = setup_server();
    let mock = mock_pixel(&server, "promo", r#"{"code":0,"data":{"fb_token":"998877"}}"#);

    let client = client_for(&server);
    let id = PixelIdBuilder::new(&client)
        .page_type("promo")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(id, "998877");
}

#[tokio::test]
async fn plain_text_body_is_the_pixel_id() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path(crate::common::PIXEL_PATH)
            .query_param("type", "share");
        then.status(200)
            .header("content-type", "text/plain")
            .body(" 5551234 \n");
    });

    let client = client_for(&server);
    let id = fetch_pixel_id(&client, Some("share")).await.unwrap();

    mock.assert();
    assert_eq!(id, " 5551234 \n", "lookup returns the value untrimmed");
}

#[tokio::test]
async fn unrecognized_payload_is_an_empty_id_not_an_error() {
    let server = setup_server();
    let mock = mock_pixel(&server, "share", r#"{"result":{"result":"x"},"ok":true}"#);

    let client = client_for(&server);
    let id = fetch_pixel_id(&client, Some("share")).await.unwrap();

    mock.assert();
    assert_eq!(id, "");
}

#[tokio::test]
async fn empty_page_type_is_still_sent() {
    let server = setup_server();
    let mock = mock_pixel(&server, "", r#"{"id":"fallback"}"#);

    let client = client_for(&server);
    let id = PixelIdBuilder::new(&client).page_type("").fetch().await.unwrap();

    mock.assert();
    assert_eq!(id, "fallback");
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/gateway/api/v1/fb_token/by_type")
            .query_param("type", "share");
        then.status(200).body(r#"{"token":"t"}"#);
    });

    let base = url::Url::parse(&format!("{}/gateway/", server.base_url())).unwrap();
    let client = pagepixel::PixelClient::builder().base_url(base).build().unwrap();
    let id = fetch_pixel_id(&client, Some("share")).await.unwrap();

    mock.assert();
    assert_eq!(id, "t");
}
