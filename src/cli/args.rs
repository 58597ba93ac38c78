//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Reddit user media gallery CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-gallery",
    version,
    about = "Browse and export media from a Reddit user's submitted posts",
    long_about = "Pages through a Reddit user's submissions via the public JSON listing,\n\
                  prints each post as a media card, and can package all fetched images\n\
                  and videos into a single ZIP archive."
)]
pub struct Args {
    /// Reddit username, `u/name`, or profile URL.
    pub user: Option<String>,

    /// Number of pages to load (0 = until end of results).
    #[arg(short, long)]
    pub pages: Option<u32>,

    /// Hide image posts.
    #[arg(long)]
    pub no_images: bool,

    /// Hide video posts.
    #[arg(long)]
    pub no_videos: bool,

    /// Hide posts without media.
    #[arg(long)]
    pub no_other: bool,

    /// Export all fetched media to a ZIP archive after loading.
    #[arg(short, long)]
    pub export: bool,

    /// Directory the archive is written to.
    #[arg(short = 'o', long = "output")]
    pub output_directory: Option<PathBuf>,

    /// Number of media downloads in flight during export.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// User agent sent to Reddit.
    #[arg(short = 'a', long = "user-agent", env = "REDDIT_GALLERY_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Start an interactive session.
    #[arg(short, long)]
    pub interactive: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Write the effective configuration to the --config path and exit.
    #[arg(long)]
    pub save_config: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(pages) = self.pages {
            config.gallery.max_pages = pages;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_images {
            config.gallery.show_images = false;
        }

        if self.no_videos {
            config.gallery.show_videos = false;
        }

        if self.no_other {
            config.gallery.show_other = false;
        }

        if let Some(dir) = &self.output_directory {
            config.export.directory = Some(dir.clone());
        }

        if let Some(concurrency) = self.concurrency {
            config.export.concurrency = concurrency;
        }

        if let Some(user_agent) = &self.user_agent {
            config.client.user_agent = user_agent.clone();
        }
    }
}
