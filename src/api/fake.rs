//! In-memory `RemoteSource` for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use crate::api::client::RemoteSource;
use crate::api::types::{Page, Post};
use crate::error::{Error, Result};

/// Serves canned pages keyed by cursor and canned media keyed by URL.
#[derive(Default)]
pub struct FakeSource {
    pages: HashMap<Option<String>, std::result::Result<Page, u16>>,
    media: HashMap<String, std::result::Result<Vec<u8>, u16>>,
    page_requests: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, cursor: Option<&str>, posts: Vec<Post>, after: Option<&str>) -> Self {
        let page = Page {
            posts,
            after: after.map(str::to_string),
        };
        self.pages.insert(cursor.map(str::to_string), Ok(page));
        self
    }

    pub fn with_page_error(mut self, cursor: Option<&str>, status: u16) -> Self {
        self.pages.insert(cursor.map(str::to_string), Err(status));
        self
    }

    pub fn with_media(mut self, url: &str, bytes: &[u8]) -> Self {
        self.media.insert(url.to_string(), Ok(bytes.to_vec()));
        self
    }

    pub fn with_media_error(mut self, url: &str, status: u16) -> Self {
        self.media.insert(url.to_string(), Err(status));
        self
    }

    pub fn page_requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSource for FakeSource {
    async fn fetch_page(&self, username: &str, cursor: Option<&str>) -> Result<Page> {
        self.page_requests.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(&cursor.map(str::to_string)) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(status)) => Err(Error::Remote {
                status: *status,
                url: format!("fake://user/{}", username),
            }),
            None => Err(Error::Remote {
                status: 404,
                url: format!("fake://user/{}", username),
            }),
        }
    }

    async fn fetch_media(&self, url: &str) -> Result<Vec<u8>> {
        match self.media.get(url) {
            Some(Ok(bytes)) => Ok(bytes.clone()),
            Some(Err(status)) => Err(Error::Remote {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(Error::Remote {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// A post with no media fields.
pub fn text_post(id: &str) -> Post {
    serde_json::from_value(json!({"id": id, "title": format!("Post {}", id)})).unwrap()
}

/// A post classified as an image served from `url`.
pub fn image_post(id: &str, title: &str, url: &str) -> Post {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "post_hint": "image",
        "url": url,
        "subreddit": "pics",
        "permalink": format!("/r/pics/comments/{}/", id),
        "score": 10
    }))
    .unwrap()
}

/// A post classified as a hosted video served from `url`.
pub fn video_post(id: &str, title: &str, url: &str) -> Post {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "is_video": true,
        "media": {"reddit_video": {"fallback_url": url}},
        "subreddit": "videos",
        "permalink": format!("/r/videos/comments/{}/", id),
        "score": 5
    }))
    .unwrap()
}

/// `count` text posts with ids `{prefix}{n}`.
pub fn text_posts(prefix: &str, count: usize) -> Vec<Post> {
    (0..count).map(|n| text_post(&format!("{}{}", prefix, n))).collect()
}
