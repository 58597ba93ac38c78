//! Reddit API module.
//!
//! This module provides:
//! - HTTP client for the public submissions listing
//! - The `RemoteSource` seam used by the session and exporter
//! - Listing response types

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{RedditApi, RemoteSource, PAGE_SIZE};
pub use types::*;
