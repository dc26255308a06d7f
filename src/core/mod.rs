//! Core components of the `pagepixel` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`PixelClient`] and its builder.
//! - The primary [`PixelError`] type.
//! - Internal response handling shared by the endpoint modules.

/// The client (`PixelClient`), builder, endpoint paths and defaults.
pub mod client;
/// The primary error type (`PixelError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::PixelClient`
pub use client::{ApiBase, PixelClient, PixelClientBuilder};
pub use error::PixelError;
