//! ZIP export of a session's media.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::PathBuf;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::api::{Post, RemoteSource};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{archive_name, entry_filename, get_archive_path, make_unique_name, write_archive};
use crate::media::{classify, extension_from_url, MediaKind};
use crate::output::create_item_bar;

/// A post selected for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportItem {
    pub id: String,
    pub title: Option<String>,
    pub kind: MediaKind,
    pub url: String,
}

impl ExportItem {
    /// Entry name before de-duplication within the archive.
    pub fn filename(&self) -> String {
        let extension = extension_from_url(&self.url)
            .or_else(|| self.kind.default_extension().map(str::to_string))
            .unwrap_or_else(|| "bin".to_string());
        entry_filename(self.title.as_deref(), &self.id, &extension)
    }
}

/// Counts of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Posts with exportable media.
    pub attempted: usize,
    /// Entries written to the archive.
    pub succeeded: usize,
    /// Ids of posts whose media could not be fetched.
    pub failed: Vec<String>,
}

/// A finished in-memory archive.
#[derive(Debug)]
pub struct ExportedArchive {
    pub name: String,
    pub bytes: Vec<u8>,
    pub report: ExportReport,
}

/// Export tuning.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub concurrency: usize,
    pub show_progress: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            show_progress: false,
        }
    }
}

/// Pick every post with image or video media, in post order.
///
/// Works over all fetched posts regardless of the active filters.
pub fn select_items(posts: &[Post]) -> Vec<ExportItem> {
    posts
        .iter()
        .filter_map(|post| {
            let media = classify(post);
            if !media.is_exportable() {
                return None;
            }
            Some(ExportItem {
                id: post.id.clone(),
                title: post.title.clone(),
                kind: media.kind,
                url: media.full_url?,
            })
        })
        .collect()
}

/// Accumulates named byte buffers into a ZIP archive held in memory.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    names: HashSet<String>,
    entries: usize,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            names: HashSet::new(),
            entries: 0,
        }
    }

    /// Add an entry, suffixing the name if it is already used.
    /// Returns the name actually written.
    pub fn add(&mut self, name: &str, bytes: &[u8]) -> Result<String> {
        let name = make_unique_name(name, &mut self.names);
        // Media is already compressed
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        self.writer.start_file(name.as_str(), options)?;
        self.writer.write_all(bytes)?;
        self.entries += 1;
        Ok(name)
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Produce the final archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch every exportable post's media and pack it into one archive.
///
/// Individual fetch failures are logged and skipped. Fails with
/// `Error::NoMediaFound` when nothing could be packaged.
pub async fn build_archive<S>(
    source: &S,
    username: &str,
    posts: &[Post],
    options: ExportOptions,
) -> Result<ExportedArchive>
where
    S: RemoteSource + ?Sized,
{
    let items = select_items(posts);
    if items.is_empty() {
        return Err(Error::NoMediaFound);
    }

    tracing::info!("Exporting {} media items for u/{}", items.len(), username);

    let progress = if options.show_progress {
        create_item_bar(items.len() as u64, "Fetching media")
    } else {
        ProgressBar::hidden()
    };

    let progress_ref = &progress;
    let fetched: Vec<(ExportItem, Result<Vec<u8>>)> = stream::iter(items)
        .map(|item| async move {
            let result = source.fetch_media(&item.url).await;
            progress_ref.inc(1);
            (item, result)
        })
        .buffered(options.concurrency.max(1))
        .collect()
        .await;
    progress.finish_and_clear();

    let mut report = ExportReport {
        attempted: fetched.len(),
        ..ExportReport::default()
    };
    let mut archive = ArchiveBuilder::new();

    for (item, result) in fetched {
        match result {
            Ok(bytes) => {
                let name = archive.add(&item.filename(), &bytes)?;
                tracing::debug!("Packed {} ({} bytes)", name, bytes.len());
            }
            Err(e) => {
                tracing::warn!("Skipping media for post {}: {}", item.id, e);
                report.failed.push(item.id);
            }
        }
    }

    report.succeeded = archive.len();
    if archive.is_empty() {
        return Err(Error::NoMediaFound);
    }

    Ok(ExportedArchive {
        name: archive_name(username, Utc::now()),
        bytes: archive.finish()?,
        report,
    })
}

/// Build the archive and save it to the configured export directory.
pub async fn export_archive<S>(
    source: &S,
    config: &Config,
    username: &str,
    posts: &[Post],
    show_progress: bool,
) -> Result<(PathBuf, ExportReport)>
where
    S: RemoteSource + ?Sized,
{
    let options = ExportOptions {
        concurrency: config.export.concurrency,
        show_progress,
    };
    let archive = build_archive(source, username, posts, options).await?;

    let path = get_archive_path(config, &archive.name);
    write_archive(&path, &archive.bytes).await?;
    tracing::info!(
        "Wrote {} ({} of {} items)",
        path.display(),
        archive.report.succeeded,
        archive.report.attempted
    );

    Ok((path, archive.report))
}
