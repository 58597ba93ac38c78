//! Configuration module for reddit-gallery.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation
//! - Username normalization

pub mod loader;
pub mod validation;

pub use loader::{ClientConfig, Config, ExportConfig, GalleryConfig};
pub use validation::{normalize_username, validate_config, validate_username};
