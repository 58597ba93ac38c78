//! Card and lightbox rendering for the terminal.

use console::style;

use crate::media::MediaKind;
use crate::render::{Card, FilterSettings, LightboxView};

/// Print one card.
pub fn print_card(card: &Card) {
    let tag = match card.media.kind {
        MediaKind::Image => style(card.media.kind.label()).green(),
        MediaKind::Video => style(card.media.kind.label()).blue(),
        MediaKind::Other => style(card.media.kind.label()).dim(),
    };

    println!(
        "{} {} [{}]",
        style(format!("#{:<4}", card.index)).dim(),
        style(&card.title).bold(),
        tag
    );
    println!("      {}", style(&card.permalink).underlined());
    match &card.media.preview_url {
        Some(url) => println!("      {}", url),
        None => println!("      {}", style("No media preview available").dim()),
    }
    println!("      r/{}  ·  Score {}", card.subreddit, card.score);
}

/// Print a batch of cards.
pub fn print_cards(cards: &[Card]) {
    for card in cards {
        print_card(card);
    }
}

/// Print the active filter toggles.
pub fn print_filters(filters: &FilterSettings) {
    let flag = |on: bool| if on { style("on").green() } else { style("off").red() };
    println!(
        "Filters: images {}  videos {}  other {}",
        flag(filters.show_images),
        flag(filters.show_videos),
        flag(filters.show_other)
    );
}

/// Print the lightbox overlay.
pub fn print_lightbox(view: &LightboxView) {
    println!();
    println!("{}", style("─".repeat(50)).dim());
    println!("{} {}", style(view.kind.label()).bold(), view.title);
    println!("  {}", style(&view.url).underlined());
    if view.zoomed {
        println!("  {}", style("(zoomed)").dim());
    }
    println!("{}", style("─".repeat(50)).dim());
}
