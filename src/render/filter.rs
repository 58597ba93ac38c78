//! Media-kind filter settings.

use crate::config::GalleryConfig;
use crate::media::MediaKind;

/// Which media kinds are shown. Consulted on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSettings {
    pub show_images: bool,
    pub show_videos: bool,
    pub show_other: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            show_images: true,
            show_videos: true,
            show_other: true,
        }
    }
}

impl From<&GalleryConfig> for FilterSettings {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            show_images: config.show_images,
            show_videos: config.show_videos,
            show_other: config.show_other,
        }
    }
}

impl FilterSettings {
    /// Whether cards of `kind` are visible.
    pub fn allows(&self, kind: MediaKind) -> bool {
        match kind {
            MediaKind::Image => self.show_images,
            MediaKind::Video => self.show_videos,
            MediaKind::Other => self.show_other,
        }
    }

    pub fn set(&mut self, kind: MediaKind, visible: bool) {
        match kind {
            MediaKind::Image => self.show_images = visible,
            MediaKind::Video => self.show_videos = visible,
            MediaKind::Other => self.show_other = visible,
        }
    }

    /// Flip the filter for `kind`, returning the new value.
    pub fn toggle(&mut self, kind: MediaKind) -> bool {
        let visible = !self.allows(kind);
        self.set(kind, visible);
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut filters = FilterSettings::default();
        assert!(!filters.toggle(MediaKind::Video));
        assert!(!filters.allows(MediaKind::Video));
        assert!(filters.allows(MediaKind::Image));
        assert!(filters.toggle(MediaKind::Video));
        assert!(filters.allows(MediaKind::Video));
    }

    #[test]
    fn test_from_config() {
        let config = GalleryConfig {
            show_other: false,
            ..GalleryConfig::default()
        };
        let filters = FilterSettings::from(&config);
        assert!(filters.show_images);
        assert!(!filters.allows(MediaKind::Other));
    }
}
