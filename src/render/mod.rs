//! Render module: turning accumulated posts into visible cards.
//!
//! Provides:
//! - Filter settings per media kind
//! - Card construction
//! - Append / rebuild render pipeline
//! - Lightbox viewer state

pub mod card;
pub mod filter;
pub mod lightbox;
pub mod pipeline;

pub use card::{permalink_url, Card};
pub use filter::FilterSettings;
pub use lightbox::{Lightbox, LightboxView};
pub use pipeline::{visible_cards, RenderPipeline};
