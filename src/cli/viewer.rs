//! Terminal front end over the gallery: one-shot and interactive modes.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::sleep;

use crate::api::RemoteSource;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::{export_archive, ExportReport};
use crate::media::MediaKind;
use crate::output::{
    create_spinner, print_cards, print_error, print_export_report, print_filters, print_help,
    print_info, print_lightbox, print_session_stats, print_status, print_success, print_warning,
};
use crate::render::{FilterSettings, Lightbox, RenderPipeline};
use crate::session::{FetchOutcome, Gallery};

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    User(String),
    More,
    Toggle(MediaKind),
    List,
    Open(usize),
    Zoom,
    Close,
    Export,
    Status,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of interactive input.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_lowercase().as_str() {
        "user" | "u" if !rest.is_empty() => Command::User(rest.to_string()),
        "more" | "m" | "next" => Command::More,
        "images" => Command::Toggle(MediaKind::Image),
        "videos" => Command::Toggle(MediaKind::Video),
        "other" => Command::Toggle(MediaKind::Other),
        "list" | "ls" => Command::List,
        "open" => match rest.trim_start_matches('#').parse() {
            Ok(n) => Command::Open(n),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "zoom" => Command::Zoom,
        "close" => Command::Close,
        "export" => Command::Export,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };

    Some(command)
}

/// Gallery, render pipeline, filters and lightbox wired to a remote source.
pub struct Viewer<'a, S: RemoteSource + ?Sized> {
    source: &'a S,
    config: &'a Config,
    gallery: Gallery,
    pipeline: RenderPipeline,
    filters: FilterSettings,
    lightbox: Lightbox,
}

impl<'a, S: RemoteSource + ?Sized> Viewer<'a, S> {
    pub fn new(source: &'a S, config: &'a Config) -> Self {
        Self {
            source,
            config,
            gallery: Gallery::new(),
            pipeline: RenderPipeline::new(),
            filters: FilterSettings::from(&config.gallery),
            lightbox: Lightbox::new(),
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    pub fn filters(&self) -> &FilterSettings {
        &self.filters
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Start a new session for `input` and render its first page.
    ///
    /// An invalid username leaves the current session and its cards alone.
    pub async fn submit(&mut self, input: &str) -> Result<FetchOutcome> {
        let ticket = self.gallery.submit(input)?;
        self.lightbox.close();
        self.pipeline.clear();

        let spinner = create_spinner(&format!("Fetching posts for u/{}", ticket.username));
        let result = self
            .source
            .fetch_page(&ticket.username, ticket.cursor.as_deref())
            .await;
        spinner.finish_and_clear();

        let outcome = self.gallery.complete(ticket, result);
        self.after_fetch();
        Ok(outcome)
    }

    /// Load and render the next page, if there is one.
    pub async fn load_more(&mut self) -> Option<FetchOutcome> {
        let outcome = self.gallery.load_next(self.source).await?;
        self.after_fetch();
        Some(outcome)
    }

    fn after_fetch(&mut self) {
        if let Some(session) = self.gallery.session() {
            print_cards(self.pipeline.append(session, &self.filters));
        }
        print_status(self.gallery.status());
    }

    /// Flip a filter and rebuild every card.
    pub fn toggle_filter(&mut self, kind: MediaKind) {
        self.filters.toggle(kind);
        print_filters(&self.filters);
        if let Some(session) = self.gallery.session() {
            let cards = self.pipeline.rebuild(session, &self.filters);
            print_cards(cards);
            print_info(&format!("{} cards visible", cards.len()));
        }
    }

    /// Open the card built from post `index` in the lightbox.
    pub fn open(&mut self, index: usize) -> Result<()> {
        let card = self
            .pipeline
            .card_for_post(index)
            .ok_or_else(|| Error::Config(format!("No visible card #{}", index)))?;

        match self.lightbox.open(card) {
            Some(view) => {
                print_lightbox(view);
                Ok(())
            }
            None => Err(Error::Config(format!("Card #{} has no media to show", index))),
        }
    }

    /// Export every fetched post's media, regardless of filters.
    pub async fn export(&self, show_progress: bool) -> Result<(PathBuf, ExportReport)> {
        let session = self
            .gallery
            .session()
            .filter(|s| !s.posts().is_empty())
            .ok_or(Error::NoMediaFound)?;

        print_info(&format!(
            "Exporting media from {} posts for u/{}...",
            session.posts().len(),
            session.username()
        ));
        let (path, report) = export_archive(
            self.source,
            self.config,
            session.username(),
            session.posts(),
            show_progress,
        )
        .await?;
        print_export_report(&path, &report);
        Ok((path, report))
    }

    /// Load pages until `max_pages` (0 = all) or end of results.
    ///
    /// The first page must succeed; later failures stop paging with a warning.
    pub async fn run_once(&mut self, input: &str) -> Result<()> {
        match self.submit(input).await? {
            FetchOutcome::Failed(e) => return Err(e),
            FetchOutcome::Empty => {
                let username = self
                    .gallery
                    .session()
                    .map(|s| s.username().to_string())
                    .unwrap_or_default();
                return Err(Error::EmptyResult(username));
            }
            _ => {}
        }

        let max_pages = self.config.gallery.max_pages;
        loop {
            let pages = self.gallery.session().map_or(0, |s| s.pages_loaded());
            if max_pages != 0 && pages >= max_pages {
                break;
            }

            self.page_delay().await;
            match self.load_more().await {
                None => break,
                Some(FetchOutcome::Failed(e)) => {
                    print_warning(&format!("Stopped paging: {}", e));
                    break;
                }
                Some(_) => {}
            }
        }

        if let Some(session) = self.gallery.session() {
            print_session_stats(session, self.pipeline.cards().len());
        }
        Ok(())
    }

    async fn page_delay(&self) {
        let delay = self.config.client.page_delay_ms;
        if delay == 0 {
            return;
        }
        let jitter = rand::thread_rng().gen_range(0..=delay / 2);
        sleep(Duration::from_millis(delay + jitter)).await;
    }

    /// Apply one command. Returns `false` when the session should end.
    pub async fn execute(&mut self, command: Command) -> bool {
        let result = match command {
            Command::User(name) => self.submit(&name).await.map(|_| ()),
            Command::More => {
                if self.load_more().await.is_none() {
                    print_status(if self.gallery.session().is_none() {
                        "Enter a username first."
                    } else {
                        self.gallery.status()
                    });
                }
                Ok(())
            }
            Command::Toggle(kind) => {
                self.toggle_filter(kind);
                Ok(())
            }
            Command::List => {
                print_cards(self.pipeline.cards());
                Ok(())
            }
            Command::Open(index) => self.open(index),
            Command::Zoom => {
                if let Some(zoomed) = self.lightbox.toggle_zoom() {
                    print_info(if zoomed { "Zoomed in" } else { "Zoomed out" });
                }
                Ok(())
            }
            Command::Close => {
                self.lightbox.close();
                Ok(())
            }
            Command::Export => self.export(true).await.map(|_| ()),
            Command::Status => {
                print_status(self.gallery.status());
                print_filters(&self.filters);
                if let Some(session) = self.gallery.session() {
                    print_session_stats(session, self.pipeline.cards().len());
                }
                Ok(())
            }
            Command::Help => {
                print_help();
                Ok(())
            }
            Command::Quit => return false,
            Command::Unknown(line) => {
                print_warning(&format!("Unknown command: {} (try 'help')", line));
                Ok(())
            }
        };

        if let Err(e) = result {
            print_error(&e.to_string());
        }
        true
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run_interactive(&mut self, initial_user: Option<&str>) -> Result<()> {
        print_help();
        if let Some(user) = initial_user {
            self.execute(Command::User(user.to_string())).await;
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if let Some(command) = parse_command(&line) {
                if !self.execute(command).await {
                    break;
                }
            }
        }

        print_success("Bye");
        Ok(())
    }
}
