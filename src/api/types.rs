//! Listing response type definitions.

use serde::{Deserialize, Serialize};

/// Top-level listing envelope: `{"kind": "Listing", "data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub data: Listing,
}

/// Listing payload with children and the pagination cursor.
#[derive(Debug, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub children: Vec<Thing>,
    pub after: Option<String>,
}

/// A single listing child; `data` holds the post.
#[derive(Debug, Deserialize)]
pub struct Thing {
    #[serde(default)]
    pub kind: String,
    pub data: Post,
}

/// A submitted post, as returned by the listing endpoint.
///
/// Only `id` is required. Media fields may be present in any combination;
/// see [`crate::media::classify`] for how they are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub over_18: bool,

    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub post_hint: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub preview: Option<Preview>,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub secure_media: Option<Media>,
}

/// Preview block with one or more source images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    #[serde(default)]
    pub images: Vec<PreviewImage>,
}

/// A preview image with its resolution ladder (smallest first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewImage {
    pub source: Option<PreviewSource>,
    #[serde(default)]
    pub resolutions: Vec<PreviewSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewSource {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Embedded media block (`media` / `secure_media`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub reddit_video: Option<RedditVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedditVideo {
    pub fallback_url: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
}

/// One page of a user's submissions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub posts: Vec<Post>,
    /// Cursor for the next page; `None` once the listing is exhausted.
    pub after: Option<String>,
}

impl From<ListingResponse> for Page {
    fn from(resp: ListingResponse) -> Self {
        let after = resp.data.after.filter(|a| !a.is_empty());
        Self {
            posts: resp.data.children.into_iter().map(|t| t.data).collect(),
            after,
        }
    }
}
