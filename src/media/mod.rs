//! Media module for classification and references.

pub mod classify;
pub mod item;

pub use classify::{classify, extension_from_url, unescape_url};
pub use item::{MediaKind, MediaRef};
