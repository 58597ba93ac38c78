//! Reddit Gallery - browse and export the media of a Reddit user's posts
//!
//! This library pages through a user's submissions on Reddit's public JSON
//! listing, classifies each post's media, accumulates posts per session, and
//! renders filtered cards incrementally.
//!
//! # Features
//!
//! - Username normalization from names, `u/name` and profile URLs
//! - Image / video / other media classification
//! - Cursor-based pagination with stale-fetch protection
//! - Append-only rendering with filter rebuilds
//! - Lightbox view of full-resolution media
//! - ZIP export with per-item failure reporting
//!
//! # Example
//!
//! ```no_run
//! use reddit_gallery::{Config, FetchOutcome, FilterSettings, Gallery, RedditApi, RenderPipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = RedditApi::new(&config.client)?;
//!
//!     let mut gallery = Gallery::new();
//!     let mut pipeline = RenderPipeline::new();
//!     let filters = FilterSettings::default();
//!
//!     gallery.open(&api, "u/spez").await?;
//!     while let Some(outcome) = gallery.load_next(&api).await {
//!         // A failed page keeps its cursor; stop instead of refetching it
//!         if let FetchOutcome::Failed(e) = outcome {
//!             eprintln!("{}", e);
//!             break;
//!         }
//!     }
//!
//!     if let Some(session) = gallery.session() {
//!         for card in pipeline.append(session, &filters) {
//!             println!("{} {}", card.media.kind, card.title);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod media;
pub mod output;
pub mod render;
pub mod session;

// Re-exports for convenience
pub use api::{Page, Post, RedditApi, RemoteSource};
pub use config::{normalize_username, Config};
pub use error::{Error, Result};
pub use export::{build_archive, export_archive, ExportReport};
pub use media::{classify, MediaKind, MediaRef};
pub use render::{Card, FilterSettings, Lightbox, RenderPipeline};
pub use session::{Cursor, FetchOutcome, Gallery, SessionState};
