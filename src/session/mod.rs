//! Session module: accumulated state for one submitted username.
//!
//! This module provides:
//! - Session state and pagination cursor
//! - The submit / advance / complete state machine
//! - Stale-fetch discarding across sessions

pub mod gallery;
pub mod state;

pub use gallery::{FetchOutcome, FetchTicket, Gallery};
pub use state::{Cursor, Phase, SessionState};
