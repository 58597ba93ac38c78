//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Card and lightbox printing
//! - Progress bars
//! - Statistics reporting

pub mod cards;
pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    print_banner, print_error, print_help, print_info, print_status, print_success, print_warning,
};
pub use cards::{print_card, print_cards, print_filters, print_lightbox};
pub use progress::{create_item_bar, create_spinner};
pub use stats::{kind_counts, print_export_report, print_session_stats};
