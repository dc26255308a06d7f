//! pagepixel: page-type aware tracking pixel bootstrap.
//!
//! Resolves a tracking pixel identifier for the current page from a backend API
//! and hands it to an analytics initializer, without ever holding up startup.
//!
//! ```no_run
//! use std::sync::Arc;
//! use pagepixel::{BootConfig, spawn_bootstrap};
//! use url::Url;
//!
//! # async fn run() -> Result<(), pagepixel::PixelError> {
//! let config = BootConfig::from_env();
//! let location = Url::parse("https://shop.example.com/front/share")?;
//! let init = Arc::new(|pixel_id: &str| println!("init pixel {pixel_id}"));
//! let _handle = spawn_bootstrap(config, Some(location), init);
//! // continue mounting the application; the bootstrap runs on its own.
//! # Ok(())
//! # }
//! ```

/// Startup sequence and its configuration profiles.
pub mod bootstrap;
/// Client, configuration and error types.
pub mod core;
/// Random redirect link lookup.
pub mod links;
/// Page type resolution from URL paths.
pub mod page_type;
/// Field extraction from loosely shaped API payloads.
pub mod payload;
/// Tracking pixel identifier lookup.
pub mod pixel;

pub use bootstrap::{
    BootConfig, BootOutcome, BootProfile, PixelInitializer, bootstrap_pixel, spawn_bootstrap,
};
pub use crate::core::{ApiBase, PixelClient, PixelClientBuilder, PixelError};
pub use links::{RandomLinkBuilder, fetch_random_link};
pub use page_type::{FALLBACK_PAGE_TYPE, current_page_type, page_type_from_path};
pub use payload::{pick_pixel_id, pick_url};
pub use pixel::{PixelIdBuilder, fetch_pixel_id};
