//! Session controller: submit, advance, and merge fetched pages.

use crate::api::{Page, Post, RemoteSource};
use crate::config::{normalize_username, validate_username};
use crate::error::{Error, Result};
use crate::session::state::{Cursor, Phase, SessionState};

/// A started page fetch.
///
/// Carries the generation of the session that started it; completing a
/// ticket from a replaced session is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub username: String,
    pub cursor: Option<String>,
    pub first_page: bool,
}

/// Result of completing a fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Posts were merged into the session.
    Loaded {
        added: usize,
        total: usize,
        end_of_results: bool,
    },
    /// The first page came back empty with no further cursor.
    Empty,
    /// The fetch failed; the cursor was left where it was.
    Failed(Error),
    /// The ticket belonged to a replaced session and was dropped.
    Stale,
}

/// Owns the current session and drives its state machine.
#[derive(Debug, Default)]
pub struct Gallery {
    session: Option<SessionState>,
    next_generation: u64,
    status: String,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session, if a username has been submitted.
    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Idle, SessionState::phase)
    }

    /// Posts of the current session (empty when idle).
    pub fn posts(&self) -> &[Post] {
        match &self.session {
            Some(session) => session.posts(),
            None => &[],
        }
    }

    /// Latest user-facing status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Discard the current session and start a new one for `input`.
    ///
    /// Returns the ticket for the first page. Any fetch still in flight for
    /// the previous session will be discarded when it completes.
    pub fn submit(&mut self, input: &str) -> Result<FetchTicket> {
        let username = normalize_username(input);
        if let Err(e) = validate_username(&username) {
            self.status = e.to_string();
            return Err(e);
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        tracing::debug!("Starting session {} for u/{}", generation, username);

        let session = self.session.insert(SessionState::new(username, generation));
        let ticket = start_fetch(session, &mut self.status);
        Ok(ticket)
    }

    /// Start the next page fetch if the session is ready and has more results.
    ///
    /// Returns `None` when idle, already fetching, or at end of results.
    pub fn maybe_advance(&mut self) -> Option<FetchTicket> {
        let session = self.session.as_mut()?;
        if !session.can_advance() {
            tracing::debug!(
                "Ignoring advance for u/{} ({}, cursor {:?})",
                session.username(),
                session.phase(),
                session.cursor()
            );
            return None;
        }

        Some(start_fetch(session, &mut self.status))
    }

    /// Merge the result of a fetch started with `ticket`.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Page>) -> FetchOutcome {
        let session = match self.session.as_mut() {
            Some(s) if s.generation() == ticket.generation => s,
            _ => {
                tracing::debug!(
                    "Discarding stale fetch for u/{} (session {})",
                    ticket.username,
                    ticket.generation
                );
                return FetchOutcome::Stale;
            }
        };

        session.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Fetch for u/{} failed: {}", session.username(), e);
                self.status = format!(
                    "Error loading posts: {}. Reddit may be blocking the request or the user may not exist.",
                    e
                );
                return FetchOutcome::Failed(e);
            }
        };

        let added = page.posts.len();
        if ticket.first_page {
            session.posts = page.posts;
        } else {
            session.posts.extend(page.posts);
        }
        session.cursor = Cursor::from_next(page.after);
        session.pages_loaded += 1;

        let total = session.posts.len();
        let end_of_results = session.cursor.is_end();
        tracing::info!(
            "Page {} for u/{}: {} posts ({} total)",
            session.pages_loaded,
            session.username(),
            added,
            total
        );

        if total == 0 && end_of_results {
            self.status = Error::EmptyResult(session.username().to_string()).to_string();
            return FetchOutcome::Empty;
        }

        self.status = format!(
            "Loaded {} posts for u/{}.{}",
            total,
            session.username(),
            if end_of_results { " End of results." } else { "" }
        );

        FetchOutcome::Loaded {
            added,
            total,
            end_of_results,
        }
    }

    /// Advance and await the fetch in one step.
    ///
    /// Returns `None` when there was nothing to fetch.
    pub async fn load_next<S>(&mut self, source: &S) -> Option<FetchOutcome>
    where
        S: RemoteSource + ?Sized,
    {
        let ticket = self.maybe_advance()?;
        let result = source
            .fetch_page(&ticket.username, ticket.cursor.as_deref())
            .await;
        Some(self.complete(ticket, result))
    }

    /// Submit a username and load its first page.
    pub async fn open<S>(&mut self, source: &S, input: &str) -> Result<FetchOutcome>
    where
        S: RemoteSource + ?Sized,
    {
        let ticket = self.submit(input)?;
        let result = source
            .fetch_page(&ticket.username, ticket.cursor.as_deref())
            .await;
        Ok(self.complete(ticket, result))
    }
}

/// Mark `session` as loading and describe the fetch it should run.
fn start_fetch(session: &mut SessionState, status: &mut String) -> FetchTicket {
    session.loading = true;
    let first_page = session.cursor == Cursor::Start;
    *status = if first_page {
        format!("Loading posts for u/{}...", session.username())
    } else {
        format!("Loading more posts for u/{}...", session.username())
    };

    FetchTicket {
        generation: session.generation(),
        username: session.username().to_string(),
        cursor: session.cursor.token().map(str::to_string),
        first_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{text_posts, FakeSource};

    fn page(posts: Vec<Post>, after: Option<&str>) -> Page {
        Page {
            posts,
            after: after.map(str::to_string),
        }
    }

    #[test]
    fn test_idle_advance_is_noop() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.phase(), Phase::Idle);
        assert!(gallery.maybe_advance().is_none());
        assert!(gallery.posts().is_empty());
    }

    #[test]
    fn test_submit_normalizes_and_starts_fetching() {
        let mut gallery = Gallery::new();
        let ticket = gallery.submit("https://www.reddit.com/user/alice/").unwrap();

        assert_eq!(ticket.username, "alice");
        assert!(ticket.first_page);
        assert_eq!(ticket.cursor, None);
        assert_eq!(gallery.phase(), Phase::Fetching);
        assert_eq!(gallery.status(), "Loading posts for u/alice...");
    }

    #[test]
    fn test_submit_rejects_empty_username() {
        let mut gallery = Gallery::new();
        assert!(gallery.submit("   ").is_err());
        assert_eq!(gallery.phase(), Phase::Idle);
    }

    #[test]
    fn test_advance_suppressed_while_fetching() {
        let mut gallery = Gallery::new();
        let _ticket = gallery.submit("alice").unwrap();
        assert!(gallery.maybe_advance().is_none());
        assert!(gallery.maybe_advance().is_none());
    }

    #[test]
    fn test_two_pages_accumulate_in_order() {
        let mut gallery = Gallery::new();
        let first = text_posts("a", 50);
        let second = text_posts("b", 30);

        let ticket = gallery.submit("alice").unwrap();
        gallery.complete(ticket, Ok(page(first.clone(), Some("t3_a49"))));

        let ticket = gallery.maybe_advance().unwrap();
        assert_eq!(ticket.cursor.as_deref(), Some("t3_a49"));
        assert!(!ticket.first_page);
        let outcome = gallery.complete(ticket, Ok(page(second.clone(), None)));

        assert!(matches!(
            outcome,
            FetchOutcome::Loaded {
                added: 30,
                total: 80,
                end_of_results: true
            }
        ));
        let expected: Vec<Post> = first.into_iter().chain(second).collect();
        assert_eq!(gallery.posts(), expected.as_slice());
        assert!(gallery.maybe_advance().is_none());
    }

    #[test]
    fn test_failure_keeps_cursor_and_allows_retry() {
        let mut gallery = Gallery::new();
        let ticket = gallery.submit("alice").unwrap();
        gallery.complete(ticket, Ok(page(text_posts("a", 2), Some("t3_a1"))));

        let ticket = gallery.maybe_advance().unwrap();
        let outcome = gallery.complete(
            ticket,
            Err(Error::Remote {
                status: 429,
                url: "x".into(),
            }),
        );

        assert!(matches!(outcome, FetchOutcome::Failed(ref e) if e.status() == Some(429)));
        assert_eq!(gallery.phase(), Phase::Ready);
        assert!(gallery.status().starts_with("Error loading posts"));
        assert_eq!(gallery.posts().len(), 2);

        let retry = gallery.maybe_advance().unwrap();
        assert_eq!(retry.cursor.as_deref(), Some("t3_a1"));
    }

    #[test]
    fn test_failed_first_page_retries_first_page() {
        let mut gallery = Gallery::new();
        let ticket = gallery.submit("alice").unwrap();
        gallery.complete(ticket, Err(Error::Parse("bad".into())));

        let retry = gallery.maybe_advance().unwrap();
        assert!(retry.first_page);
        assert_eq!(retry.cursor, None);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut gallery = Gallery::new();
        let stale = gallery.submit("alice").unwrap();
        let current = gallery.submit("bob").unwrap();

        let outcome = gallery.complete(stale, Ok(page(text_posts("a", 5), Some("t3_a4"))));
        assert!(matches!(outcome, FetchOutcome::Stale));

        let session = gallery.session().unwrap();
        assert_eq!(session.username(), "bob");
        assert!(session.posts().is_empty());
        assert!(session.is_loading());
        assert_eq!(session.cursor(), &Cursor::Start);
        assert_eq!(gallery.status(), "Loading posts for u/bob...");

        gallery.complete(current, Ok(page(text_posts("b", 1), None)));
        assert_eq!(gallery.posts().len(), 1);
    }

    #[test]
    fn test_empty_first_page() {
        let mut gallery = Gallery::new();
        let ticket = gallery.submit("ghost").unwrap();
        let outcome = gallery.complete(ticket, Ok(page(Vec::new(), None)));

        assert!(matches!(outcome, FetchOutcome::Empty));
        assert_eq!(gallery.status(), "No posts found for u/ghost");
    }

    #[test]
    fn test_empty_page_with_cursor_keeps_going() {
        let mut gallery = Gallery::new();
        let ticket = gallery.submit("alice").unwrap();
        let outcome = gallery.complete(ticket, Ok(page(Vec::new(), Some("t3_z"))));

        assert!(matches!(outcome, FetchOutcome::Loaded { added: 0, .. }));
        assert!(gallery.maybe_advance().is_some());
    }

    #[test]
    fn test_load_next_against_source() {
        let source = FakeSource::new()
            .with_page(None, text_posts("a", 3), Some("t3_a2"))
            .with_page(Some("t3_a2"), text_posts("b", 2), None);

        let mut gallery = Gallery::new();
        tokio_test::block_on(async {
            gallery.open(&source, "u/alice").await.unwrap();
            let outcome = gallery.load_next(&source).await;
            assert!(matches!(outcome, Some(FetchOutcome::Loaded { total: 5, .. })));
            assert!(gallery.load_next(&source).await.is_none());
        });

        assert_eq!(source.page_requests(), 2);
        assert_eq!(gallery.status(), "Loaded 5 posts for u/alice. End of results.");
    }
}
