//! Configuration validation and username normalization.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Host prefix stripped from non-URL input.
const REDDIT_PREFIX: &str = "https://www.reddit.com/";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_user_agent(&config.client.user_agent)?;
    validate_base_url(&config.client.base_url)?;

    if config.client.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    if config.export.concurrency == 0 {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: "Export concurrency must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate the listing host.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = url::Url::parse(base_url)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// Validate a normalized username against Reddit's username shape.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: "Please enter a Reddit username".to_string(),
        });
    }

    // 3-20 chars, alphanumeric, hyphens, underscores
    let username_pattern = Regex::new(r"^[A-Za-z0-9_-]{3,20}$").unwrap();

    if !username_pattern.is_match(username) {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "'{}' is not a valid Reddit username (3-20 letters, digits, '-' or '_')",
                username
            ),
        });
    }

    Ok(())
}

/// Extract a bare username from free-form input.
///
/// Accepts profile URLs (`https://www.reddit.com/user/foo/`), `u/foo`,
/// `user/foo` and bare names. Returns an empty string when nothing usable
/// is left.
pub fn normalize_username(input: &str) -> String {
    let input = input.trim();

    if let Ok(url) = url::Url::parse(input) {
        if let Some(name) = username_from_url(&url) {
            return name;
        }
    }

    let mut rest = strip_prefix_ignore_case(input, REDDIT_PREFIX).unwrap_or(input);
    rest = strip_prefix_ignore_case(rest, "u/")
        .or_else(|| strip_prefix_ignore_case(rest, "user/"))
        .unwrap_or(rest);

    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    rest[..end].to_string()
}

/// Find the segment following `/u/` or `/user/` in a URL path.
fn username_from_url(url: &url::Url) -> Option<String> {
    let segments: Vec<&str> = url.path_segments()?.collect();

    segments
        .windows(2)
        .find(|pair| pair[0].eq_ignore_ascii_case("u") || pair[0].eq_ignore_ascii_case("user"))
        .map(|pair| pair[1])
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_profile_urls() {
        assert_eq!(normalize_username("https://www.reddit.com/user/foo/"), "foo");
        assert_eq!(normalize_username("http://reddit.com/u/alice"), "alice");
        assert_eq!(
            normalize_username("https://old.reddit.com/USER/Bob/submitted/?sort=top"),
            "Bob"
        );
    }

    #[test]
    fn test_normalize_short_forms() {
        assert_eq!(normalize_username("u/foo"), "foo");
        assert_eq!(normalize_username("U/foo"), "foo");
        assert_eq!(normalize_username("user/foo/"), "foo");
        assert_eq!(normalize_username("foo"), "foo");
        assert_eq!(normalize_username("  foo  "), "foo");
        assert_eq!(normalize_username("foo?x=1"), "foo");
        assert_eq!(normalize_username("foo#top"), "foo");
        assert_eq!(normalize_username(""), "");
    }

    #[test]
    fn test_normalize_strips_only_one_prefix() {
        assert_eq!(normalize_username("u/u/foo"), "u");
        assert_eq!(normalize_username("HTTPS://WWW.REDDIT.COM/u/foo"), "foo");
    }

    #[test]
    fn test_normalize_url_without_user_segment_falls_through() {
        assert_eq!(normalize_username("https://www.reddit.com/r/pics"), "r");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in [
            "foo",
            "u/foo",
            "user/foo/bar",
            "https://www.reddit.com/user/foo/",
            "foo?x=1",
            "x:y",
            "",
        ] {
            let once = normalize_username(input);
            assert_eq!(normalize_username(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Some_User-42").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("a_name_that_is_way_too_long").is_err());
    }

    #[test]
    fn test_validate_config() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.export.concurrency = 0;
        assert!(validate_config(&config).is_err());

        config.export.concurrency = 2;
        config.client.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());

        config.client.base_url = "https://example.com".to_string();
        config.client.user_agent = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
