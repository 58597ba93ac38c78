//! Filesystem module.
//!
//! Provides:
//! - Archive and entry filename generation
//! - Export directory management

pub mod naming;
pub mod paths;

pub use naming::{archive_name, entry_filename, make_unique_name, slugify};
pub use paths::{ensure_dir, get_archive_path, write_archive};
