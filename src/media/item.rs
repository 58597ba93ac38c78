//! Media reference representation.

use std::fmt;

/// Type of a post's primary displayable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    /// All kinds, in filter display order.
    pub const ALL: [MediaKind; 3] = [MediaKind::Image, MediaKind::Video, MediaKind::Other];

    /// Badge text shown on a card.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Other => "Other",
        }
    }

    /// File extension used when the URL doesn't carry one.
    pub fn default_extension(&self) -> Option<&'static str> {
        match self {
            MediaKind::Image => Some("jpg"),
            MediaKind::Video => Some("mp4"),
            MediaKind::Other => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Displayable media derived from a post. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub kind: MediaKind,

    /// URL suited for an inline preview.
    pub preview_url: Option<String>,

    /// Full-resolution URL for the lightbox and export.
    pub full_url: Option<String>,
}

impl MediaRef {
    /// A post with nothing to show.
    pub fn other() -> Self {
        Self {
            kind: MediaKind::Other,
            preview_url: None,
            full_url: None,
        }
    }

    pub fn image(preview_url: String, full_url: String) -> Self {
        Self {
            kind: MediaKind::Image,
            preview_url: Some(preview_url),
            full_url: Some(full_url),
        }
    }

    pub fn video(url: String) -> Self {
        Self {
            kind: MediaKind::Video,
            preview_url: Some(url.clone()),
            full_url: Some(url),
        }
    }

    /// Whether the archive exporter should package this media.
    pub fn is_exportable(&self) -> bool {
        self.kind != MediaKind::Other && self.full_url.is_some()
    }
}
