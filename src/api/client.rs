//! Reddit listing HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response};

use crate::api::types::{ListingResponse, Page};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Posts requested per listing page.
pub const PAGE_SIZE: usize = 50;

/// Source of listing pages and media bytes.
///
/// `RedditApi` is the network implementation; anything that can hand back
/// pages and bytes (tests, mirrors) can stand in for it.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch one page of `username`'s submissions after `cursor`.
    async fn fetch_page(&self, username: &str, cursor: Option<&str>) -> Result<Page>;

    /// Fetch the raw bytes behind a media URL.
    async fn fetch_media(&self, url: &str) -> Result<Vec<u8>>;
}

/// Unauthenticated client for Reddit's public JSON listings.
pub struct RedditApi {
    client: Client,
    base_url: url::Url,
}

impl RedditApi {
    /// Create a new client from the `[client]` configuration section.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = url::Url::parse(&config.base_url)?;

        Ok(Self { client, base_url })
    }

    /// Build the submissions URL for a user and optional cursor.
    pub fn listing_url(&self, username: &str, cursor: Option<&str>) -> Result<url::Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["user", username, "submitted.json"]);

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("raw_json", "1")
                .append_pair("limit", &PAGE_SIZE.to_string());
            if let Some(after) = cursor {
                query.append_pair("after", after);
            }
        }

        Ok(url)
    }

    /// Make a GET request, mapping non-success statuses to `Error::Remote`.
    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl RemoteSource for RedditApi {
    async fn fetch_page(&self, username: &str, cursor: Option<&str>) -> Result<Page> {
        let url = self.listing_url(username, cursor)?;
        let response = self.get(url.as_str()).await?;
        let text = response.text().await?;
        tracing::debug!("Listing response length: {} bytes", text.len());

        let listing: ListingResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Parse(format!(
                "Failed to parse listing: {} - Response: {}",
                e,
                text.chars().take(300).collect::<String>()
            ))
        })?;

        Ok(Page::from(listing))
    }

    async fn fetch_media(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> RedditApi {
        let config = ClientConfig {
            base_url: base.to_string(),
            ..ClientConfig::default()
        };
        RedditApi::new(&config).unwrap()
    }

    #[test]
    fn test_listing_url_first_page() {
        let url = api("https://www.reddit.com").listing_url("alice", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.reddit.com/user/alice/submitted.json?raw_json=1&limit=50"
        );
    }

    #[test]
    fn test_listing_url_with_cursor() {
        let url = api("https://www.reddit.com/")
            .listing_url("alice", Some("t3_xyz"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.reddit.com/user/alice/submitted.json?raw_json=1&limit=50&after=t3_xyz"
        );
    }

    #[test]
    fn test_listing_url_escapes_username() {
        let url = api("http://localhost:8080").listing_url("a b", None).unwrap();
        assert!(url.path().starts_with("/user/a%20b/"));
    }
}
