//! Statistics reporting.

use std::path::Path;

use console::style;

use crate::export::ExportReport;
use crate::media::{classify, MediaKind};
use crate::session::SessionState;

/// Per-kind post counts for a session.
pub fn kind_counts(session: &SessionState) -> [(MediaKind, usize); 3] {
    MediaKind::ALL.map(|kind| {
        let count = session
            .posts()
            .iter()
            .filter(|p| classify(p).kind == kind)
            .count();
        (kind, count)
    })
}

/// Print statistics for the current session.
pub fn print_session_stats(session: &SessionState, visible: usize) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for u/{}:", session.username())).bold()
    );
    println!("  Pages:    {}", session.pages_loaded());
    println!("  Posts:    {}", session.posts().len());
    for (kind, count) in kind_counts(session) {
        println!("  {:<9} {}", format!("{}:", kind.label()), count);
    }
    println!("  Visible:  {}", visible);
    if session.cursor().is_end() {
        println!("  {}", style("End of results").dim());
    }
}

/// Print the result of an archive export.
pub fn print_export_report(path: &Path, report: &ExportReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Export:").bold());
    println!("  Archive:   {}", path.display());
    println!("  Packaged:  {}", style(report.succeeded).green());
    if !report.failed.is_empty() {
        println!("  Skipped:   {}", style(report.failed.len()).yellow());
    }
    println!("  Attempted: {}", report.attempted);
    println!("{}", style("═".repeat(50)).dim());
}
