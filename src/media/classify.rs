//! Post media classification.

use crate::api::types::{Post, PreviewImage};
use crate::media::item::MediaRef;

/// Resolution ladder index used for inline previews.
const PREVIEW_RESOLUTION_INDEX: usize = 2;

/// Classify a post's media.
///
/// First match wins:
/// 1. hosted video with a fallback URL
/// 2. `post_hint == "image"` with a direct URL
/// 3. a preview image (mid-sized resolution for the preview)
/// 4. an http(s) thumbnail, full URL falling back to the thumbnail
/// 5. nothing: `Other`
pub fn classify(post: &Post) -> MediaRef {
    if post.is_video {
        if let Some(fallback) = video_fallback_url(post) {
            return MediaRef::video(unescape_url(fallback));
        }
    }

    if post.post_hint.as_deref() == Some("image") {
        if let Some(url) = non_empty(post.url.as_deref()) {
            let url = unescape_url(url);
            return MediaRef::image(url.clone(), url);
        }
    }

    if let Some(image) = post.preview.as_ref().and_then(|p| p.images.first()) {
        if let Some(source) = image.source.as_ref().and_then(|s| non_empty(Some(s.url.as_str()))) {
            let full = unescape_url(source);
            let preview = mid_resolution(image)
                .map(unescape_url)
                .unwrap_or_else(|| full.clone());
            return MediaRef::image(preview, full);
        }
    }

    if let Some(thumb) = post.thumbnail.as_deref().filter(|t| is_http(t)) {
        let preview = unescape_url(thumb);
        let full = non_empty(post.url.as_deref())
            .map(unescape_url)
            .unwrap_or_else(|| preview.clone());
        return MediaRef::image(preview, full);
    }

    MediaRef::other()
}

/// Undo the HTML escaping the listing applies to URLs.
pub fn unescape_url(url: &str) -> String {
    url.replace("&amp;", "&")
}

/// Extract a file extension from a URL path, ignoring query and fragment.
pub fn extension_from_url(url: &str) -> Option<String> {
    let path = url.split(&['?', '#'][..]).next()?;
    let filename = path.rsplit('/').next()?;
    let (stem, ext) = filename.rsplit_once('.')?;

    // Validate it looks like an extension (1-5 chars, alphanumeric)
    if !stem.is_empty()
        && !ext.is_empty()
        && ext.len() <= 5
        && ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        Some(ext.to_lowercase())
    } else {
        None
    }
}

fn video_fallback_url(post: &Post) -> Option<&str> {
    [post.media.as_ref(), post.secure_media.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(|m| m.reddit_video.as_ref())
        .find_map(|v| non_empty(v.fallback_url.as_deref()))
}

fn mid_resolution(image: &PreviewImage) -> Option<&str> {
    let last = image.resolutions.len().checked_sub(1)?;
    let res = &image.resolutions[PREVIEW_RESOLUTION_INDEX.min(last)];
    non_empty(Some(res.url.as_str()))
}

fn is_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
