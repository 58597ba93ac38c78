//! Command-line front end.
//!
//! Provides:
//! - Argument parsing and config merging
//! - One-shot and interactive viewers

pub mod args;
pub mod viewer;

pub use args::Args;
pub use viewer::{parse_command, Command, Viewer};
