use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use httpmock::Method::GET;
use pagepixel::{BootConfig, PixelInitializer, spawn_bootstrap};
use url::Url;

use crate::common::{PIXEL_PATH, base_url, mock_pixel, setup_server};

fn counting_initializer() -> (Arc<AtomicUsize>, Arc<dyn PixelInitializer>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let init: Arc<dyn PixelInitializer> = Arc::new(move |_: &str| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (count, init)
}

#[tokio::test]
async fn spawned_bootstrap_initializes_once() {
    let server = setup_server();
    let mock = mock_pixel(&server, "share", r#"{"pixel_id":"777"}"#);

    let (count, init) = counting_initializer();
    let location = Url::parse("https://shop.example.com/front/share").unwrap();
    let handle = spawn_bootstrap(BootConfig::with_base_url(base_url(&server)), Some(location), init);

    handle.await.unwrap();
    mock.assert_hits(1);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn spawned_bootstrap_swallows_failures() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(PIXEL_PATH);
        then.status(500);
    });

    let (count, init) = counting_initializer();
    let location = Url::parse("https://shop.example.com/front/share").unwrap();
    let handle = spawn_bootstrap(BootConfig::with_base_url(base_url(&server)), Some(location), init);

    assert!(handle.await.is_ok(), "bootstrap task must finish cleanly");
    mock.assert();
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn spawned_bootstrap_does_not_block_the_caller() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path(PIXEL_PATH);
        then.status(200)
            .delay(Duration::from_millis(500))
            .body(r#"{"pixelId":"slow"}"#);
    });

    let (count, init) = counting_initializer();
    let handle = spawn_bootstrap(BootConfig::with_base_url(base_url(&server)), None, init);

    // Startup continues while the lookup is still in flight.
    assert!(!handle.is_finished());
    assert_eq!(count.load(Ordering::SeqCst), 0);

    handle.await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreachable_backend_never_escapes() {
    let (count, init) = counting_initializer();
    let config = BootConfig::with_base_url(Url::parse("http://127.0.0.1:9/").unwrap())
        .timeout(Duration::from_secs(2));

    let handle = spawn_bootstrap(config, None, init);

    assert!(handle.await.is_ok());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}
