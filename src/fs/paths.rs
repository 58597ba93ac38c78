//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Get the path an archive with the given name is written to.
pub fn get_archive_path(config: &Config, archive_name: &str) -> PathBuf {
    config.export_directory().join(archive_name)
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}

/// Write archive bytes to `path`, creating parent directories.
pub async fn write_archive(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
