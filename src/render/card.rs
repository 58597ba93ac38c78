//! Display cards built from posts.

use crate::api::Post;
use crate::media::{classify, MediaRef};

/// Host prefixed to post permalinks.
const PERMALINK_HOST: &str = "https://www.reddit.com";

/// One rendered post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Position of the source post in the session's post list.
    pub index: usize,
    pub id: String,
    pub title: String,
    pub permalink: String,
    pub subreddit: String,
    pub score: i64,
    pub media: MediaRef,
}

impl Card {
    /// Build a card from the post at `index`.
    pub fn from_post(index: usize, post: &Post) -> Self {
        Self::with_media(index, post, classify(post))
    }

    /// Build a card with an already-classified media reference.
    pub fn with_media(index: usize, post: &Post, media: MediaRef) -> Self {
        let title = post
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("[no title]")
            .to_string();

        Self {
            index,
            id: post.id.clone(),
            title,
            permalink: permalink_url(&post.permalink),
            subreddit: post.subreddit.clone(),
            score: post.score,
            media,
        }
    }
}

/// Absolute URL of a post permalink.
pub fn permalink_url(permalink: &str) -> String {
    if permalink.starts_with("http://") || permalink.starts_with("https://") {
        permalink.to_string()
    } else {
        format!("{}{}", PERMALINK_HOST, permalink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{image_post, text_post};
    use crate::media::MediaKind;

    #[test]
    fn test_card_from_image_post() {
        let post = image_post("abc", "A cat", "https://i.redd.it/cat.jpg");
        let card = Card::from_post(4, &post);

        assert_eq!(card.index, 4);
        assert_eq!(card.title, "A cat");
        assert_eq!(card.permalink, "https://www.reddit.com/r/pics/comments/abc/");
        assert_eq!(card.subreddit, "pics");
        assert_eq!(card.score, 10);
        assert_eq!(card.media.kind, MediaKind::Image);
    }

    #[test]
    fn test_missing_title() {
        let mut post = text_post("x");
        post.title = None;
        assert_eq!(Card::from_post(0, &post).title, "[no title]");
    }
}
