//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the session status line.
pub fn print_status(message: &str) {
    println!("{} {}", style("STATUS").magenta().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reddit Gallery                                    ║
║     Browse and export a user's submitted media        ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the interactive command reference.
pub fn print_help() {
    println!();
    println!("{}", style("Commands:").bold());
    println!("  user <name>            start a new session (name, u/name or profile URL)");
    println!("  more                   load the next page");
    println!("  images|videos|other    toggle a media filter");
    println!("  list                   show all visible cards");
    println!("  open <n>               open card #n in the lightbox");
    println!("  zoom / close           toggle zoom / close the lightbox");
    println!("  export                 save all fetched media to a ZIP archive");
    println!("  status                 show session status");
    println!("  help / quit");
    println!();
}
