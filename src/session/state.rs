//! Per-username session state.

use std::fmt;

use crate::api::Post;

/// Position in a user's paginated submissions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Nothing fetched yet; the next fetch is the first page.
    #[default]
    Start,
    /// More results after this token.
    After(String),
    /// End of results.
    End,
}

impl Cursor {
    /// Build the cursor following a page from the listing's `after` value.
    pub fn from_next(after: Option<String>) -> Self {
        match after {
            Some(token) if !token.is_empty() => Cursor::After(token),
            _ => Cursor::End,
        }
    }

    /// Token to pass as `after=`, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Cursor::After(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Cursor::End)
    }
}

/// Where a session's state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session submitted.
    Idle,
    /// A page fetch is in flight.
    Fetching,
    /// Waiting for the next trigger.
    Ready,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Fetching => write!(f, "fetching"),
            Phase::Ready => write!(f, "ready"),
        }
    }
}

/// State for one submitted username.
///
/// Mutated only by completed page fetches. Replaced wholesale when a new
/// username is submitted.
#[derive(Debug)]
pub struct SessionState {
    username: String,
    generation: u64,
    pub(crate) cursor: Cursor,
    pub(crate) loading: bool,
    pub(crate) posts: Vec<Post>,
    pub(crate) pages_loaded: u32,
}

impl SessionState {
    /// Create a fresh session for a normalized username.
    pub fn new(username: String, generation: u64) -> Self {
        Self {
            username,
            generation,
            cursor: Cursor::Start,
            loading: false,
            posts: Vec::new(),
            pages_loaded: 0,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Identity of this session; differs for every submit.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// All posts fetched so far, in server order. Not de-duplicated.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn pages_loaded(&self) -> u32 {
        self.pages_loaded
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Fetching
        } else {
            Phase::Ready
        }
    }

    /// Whether a trigger would start a fetch right now.
    pub fn can_advance(&self) -> bool {
        !self.loading && !self.cursor.is_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_from_next() {
        assert_eq!(Cursor::from_next(Some("t3_a".into())), Cursor::After("t3_a".into()));
        assert_eq!(Cursor::from_next(None), Cursor::End);
        assert_eq!(Cursor::from_next(Some(String::new())), Cursor::End);
        assert_eq!(Cursor::Start.token(), None);
    }

    #[test]
    fn test_fresh_session() {
        let state = SessionState::new("alice".into(), 3);
        assert_eq!(state.username(), "alice");
        assert_eq!(state.generation(), 3);
        assert_eq!(state.cursor(), &Cursor::Start);
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.can_advance());
        assert!(state.posts().is_empty());
    }
}
