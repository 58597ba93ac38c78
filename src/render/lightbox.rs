//! Full-resolution viewer state.

use crate::media::MediaKind;
use crate::render::card::Card;

/// What the lightbox is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub post_index: usize,
    pub title: String,
    pub kind: MediaKind,
    pub url: String,
    pub zoomed: bool,
}

/// Overlay showing one card's full-resolution media.
#[derive(Debug, Default)]
pub struct Lightbox {
    view: Option<LightboxView>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&LightboxView> {
        self.view.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    /// Open `card`. Cards without displayable media are ignored.
    pub fn open(&mut self, card: &Card) -> Option<&LightboxView> {
        if card.media.kind == MediaKind::Other {
            return None;
        }
        let url = card
            .media
            .full_url
            .clone()
            .or_else(|| card.media.preview_url.clone())?;

        self.view = Some(LightboxView {
            post_index: card.index,
            title: card.title.clone(),
            kind: card.media.kind,
            url,
            zoomed: false,
        });
        self.view.as_ref()
    }

    pub fn close(&mut self) {
        self.view = None;
    }

    /// Toggle zoom on an open image. Returns the new zoom state.
    pub fn toggle_zoom(&mut self) -> Option<bool> {
        let view = self.view.as_mut()?;
        if view.kind != MediaKind::Image {
            return None;
        }
        view.zoomed = !view.zoomed;
        Some(view.zoomed)
    }
}
