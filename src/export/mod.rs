//! Export module: packaging fetched media into a single archive.

pub mod archive;

pub use archive::{
    build_archive, export_archive, select_items, ArchiveBuilder, ExportItem, ExportOptions,
    ExportReport, ExportedArchive,
};
