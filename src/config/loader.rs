//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// User agent sent with every request. Reddit throttles generic agents hard.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Listing host.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Delay between consecutive page fetches in one-shot mode.
    #[serde(default = "default_page_delay")]
    pub page_delay_ms: u64,
}

/// Gallery display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Initial state of the image filter.
    #[serde(default = "default_true")]
    pub show_images: bool,

    /// Initial state of the video filter.
    #[serde(default = "default_true")]
    pub show_videos: bool,

    /// Initial state of the "other" filter.
    #[serde(default = "default_true")]
    pub show_other: bool,

    /// Pages to load in one-shot mode (0 = until end of results).
    #[serde(default)]
    pub max_pages: u32,
}

/// Archive export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory archives are written to.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Media fetches in flight at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            page_delay_ms: default_page_delay(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            show_images: true,
            show_videos: true,
            show_other: true,
            max_pages: 0,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            concurrency: default_concurrency(),
        }
    }
}

fn default_user_agent() -> String {
    format!(
        "{}/{} (media gallery viewer)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

fn default_base_url() -> String {
    "https://www.reddit.com".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

fn default_page_delay() -> u64 {
    1500
}

fn default_concurrency() -> usize {
    4
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective export directory.
    pub fn export_directory(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Locate the config file: the given path if it exists, else the
    /// platform config directory.
    pub fn resolve_path(requested: &Path) -> Option<PathBuf> {
        if requested.exists() {
            return Some(requested.to_path_buf());
        }

        let dirs = directories::ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))?;
        let fallback = dirs.config_dir().join("config.toml");
        fallback.exists().then_some(fallback)
    }
}
