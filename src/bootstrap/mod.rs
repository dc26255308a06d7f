//! Startup sequence: page type, pixel id lookup, analytics initialization.
//!
//! The sequence is best effort. [`bootstrap_pixel`] reports what happened as a
//! `Result`; [`spawn_bootstrap`] runs it in the background and drops that result,
//! so startup continues whether or not analytics comes up.

mod config;

pub use config::{API_BASE_VARS, BootConfig, BootProfile};

use std::sync::Arc;

use tokio::task::JoinHandle;
use url::Url;

use crate::{PixelClient, PixelError, page_type::current_page_type, pixel};

/// Activates the third-party tracking snippet for a resolved pixel id.
pub trait PixelInitializer: Send + Sync {
    /// Called at most once per bootstrap, with a non-empty trimmed pixel id.
    fn init(&self, pixel_id: &str);
}

impl<F> PixelInitializer for F
where
    F: Fn(&str) + Send + Sync,
{
    fn init(&self, pixel_id: &str) {
        self(pixel_id);
    }
}

/// What a bootstrap run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootOutcome {
    /// The initializer was called with this (trimmed) pixel id.
    Initialized(String),
    /// The backend answered but no usable pixel id was found.
    EmptyPixelId,
    /// No backend is configured, or a relative profile has no page location.
    Skipped,
}

/// Runs the bootstrap sequence once and reports the outcome.
///
/// # Errors
///
/// Returns `PixelError` if the base path does not resolve against `location`,
/// the client cannot be built, or the lookup fails.
/// Callers at startup are expected to discard it; see [`spawn_bootstrap`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(config, initializer), err))]
pub async fn bootstrap_pixel(
    config: &BootConfig,
    location: Option<&Url>,
    initializer: &dyn PixelInitializer,
) -> Result<BootOutcome, PixelError> {
    let page_type = current_page_type(location);

    let builder = PixelClient::builder().timeout(config.timeout);
    let builder = match (&config.profile, location) {
        (Some(BootProfile::WithBaseUrlOverride(base)), _) => builder.base_url(base.clone()),
        (Some(BootProfile::WithBasePath(path)), Some(location)) => {
            builder.base_url(location.join(path)?)
        }
        (Some(BootProfile::RelativeOnly), Some(location)) => builder.origin(location.clone()),
        (Some(BootProfile::WithBasePath(_) | BootProfile::RelativeOnly), None) | (None, _) => {
            return Ok(BootOutcome::Skipped);
        }
    };
    let client = builder.build()?;

    let pixel_id = pixel::fetch_pixel_id(&client, Some(&page_type)).await?;
    let pixel_id = pixel_id.trim();
    if pixel_id.is_empty() {
        return Ok(BootOutcome::EmptyPixelId);
    }

    initializer.init(pixel_id);
    Ok(BootOutcome::Initialized(pixel_id.to_string()))
}

/// Starts the bootstrap on the tokio runtime without waiting for it.
///
/// The outcome, including any error, is discarded. The returned handle resolves
/// once the attempt has finished; lookup errors never reach it.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn spawn_bootstrap(
    config: BootConfig,
    location: Option<Url>,
    initializer: Arc<dyn PixelInitializer>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = bootstrap_pixel(&config, location.as_ref(), initializer.as_ref()).await;

        #[cfg(feature = "tracing")]
        {
            match &outcome {
                Ok(outcome) => tracing::debug!(?outcome, "pixel bootstrap finished"),
                Err(e) => tracing::debug!(error = %e, "pixel bootstrap failed, continuing without analytics"),
            }
        }

        let _ = outcome;
    })
}
