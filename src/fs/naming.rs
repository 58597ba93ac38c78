//! Filename generation for archive entries and archives.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};

/// Maximum length of a title slug.
const MAX_SLUG_LENGTH: usize = 60;

/// Render a title as a lowercase, hyphen-joined, filesystem-safe slug.
///
/// Runs of non-alphanumeric characters collapse to a single `-`, leading and
/// trailing separators are trimmed, and the result is cut to 60 characters.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_sep = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c);
        } else {
            pending_sep = true;
        }
    }

    let truncated: String = slug.chars().take(MAX_SLUG_LENGTH).collect();
    truncated.trim_end_matches('-').to_string()
}

/// Build the archive entry name for a post.
///
/// Falls back to the post id when the title has no usable characters.
pub fn entry_filename(title: Option<&str>, id: &str, extension: &str) -> String {
    let slug = title.map(slugify).unwrap_or_default();
    let stem = if slug.is_empty() { id } else { slug.as_str() };
    format!("{}.{}", stem, extension)
}

/// Return `name`, or `name` with a numeric suffix if it is already taken.
///
/// Records the returned name in `taken`.
pub fn make_unique_name(name: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.to_string()) {
        return name.to_string();
    }

    let (stem, ext) = match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot..]),
        None => (name, ""),
    };

    let mut counter = 2;
    loop {
        let candidate = format!("{}_{}{}", stem, counter, ext);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}

/// Archive file name: `reddit_<username>_<UTC timestamp>.zip`.
///
/// The timestamp is RFC 3339 at second precision with `:` and `T` removed,
/// e.g. `2024-05-01103000Z`.
pub fn archive_name(username: &str, at: DateTime<Utc>) -> String {
    let stamp: String = at
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .chars()
        .filter(|c| *c != ':' && *c != 'T')
        .collect();
    format!("reddit_{}_{}.zip", username, stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  --My   Cat (OC)--  "), "my-cat-oc");
        assert_eq!(slugify("already-slugged"), "already-slugged");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_truncates() {
        let title = "a".repeat(100);
        assert_eq!(slugify(&title).len(), 60);
    }

    #[test]
    fn test_slugify_truncation_drops_trailing_separator() {
        let title = format!("{} bcd", "a".repeat(59));
        let slug = slugify(&title);
        assert_eq!(slug, "a".repeat(59));
        assert_eq!(entry_filename(Some(&title), "x", "jpg"), format!("{}.jpg", slug));
    }

    #[test]
    fn test_entry_filename() {
        assert_eq!(entry_filename(Some("My Cat"), "abc", "jpg"), "my-cat.jpg");
        assert_eq!(entry_filename(Some("???"), "abc", "mp4"), "abc.mp4");
        assert_eq!(entry_filename(None, "abc", "png"), "abc.png");
    }

    #[test]
    fn test_make_unique_name() {
        let mut taken = HashSet::new();
        assert_eq!(make_unique_name("cat.jpg", &mut taken), "cat.jpg");
        assert_eq!(make_unique_name("cat.jpg", &mut taken), "cat_2.jpg");
        assert_eq!(make_unique_name("cat.jpg", &mut taken), "cat_3.jpg");
        assert_eq!(make_unique_name("noext", &mut taken), "noext");
        assert_eq!(make_unique_name("noext", &mut taken), "noext_2");
    }

    #[test]
    fn test_archive_name() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        assert_eq!(
            archive_name("alice", at),
            "reddit_alice_2024-05-01103000Z.zip"
        );
    }
}
