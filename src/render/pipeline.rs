//! Incremental card rendering over a session's posts.

use crate::api::Post;
use crate::render::card::Card;
use crate::render::filter::FilterSettings;
use crate::session::SessionState;

/// Cards for the posts in `posts[start..]` that pass `filters`, in order.
///
/// Pure: classification and filtering only.
pub fn visible_cards<'a>(
    posts: &'a [Post],
    start: usize,
    filters: &'a FilterSettings,
) -> impl Iterator<Item = Card> + 'a {
    posts
        .iter()
        .enumerate()
        .skip(start)
        .map(|(index, post)| Card::from_post(index, post))
        .filter(move |card| filters.allows(card.media.kind))
}

/// Rendered card list for the current session.
///
/// Append mode only ever pushes to the end, so cards already handed out
/// keep their position. A new session (different generation) starts over.
#[derive(Debug, Default)]
pub struct RenderPipeline {
    generation: Option<u64>,
    rendered_upto: usize,
    cards: Vec<Card>,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// All visible cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card for the post at `index`, if it is visible.
    pub fn card_for_post(&self, index: usize) -> Option<&Card> {
        self.cards.iter().find(|c| c.index == index)
    }

    /// Render posts added since the last call. Returns the new cards.
    pub fn append(&mut self, session: &SessionState, filters: &FilterSettings) -> &[Card] {
        if self.generation != Some(session.generation()) {
            self.clear();
            self.generation = Some(session.generation());
        }

        let posts = session.posts();
        let first_new = self.cards.len();
        self.cards.extend(visible_cards(posts, self.rendered_upto, filters));
        self.rendered_upto = posts.len();

        tracing::debug!(
            "Rendered {} new cards ({} visible of {} posts)",
            self.cards.len() - first_new,
            self.cards.len(),
            posts.len()
        );

        &self.cards[first_new..]
    }

    /// Drop every card and render the whole session again.
    pub fn rebuild(&mut self, session: &SessionState, filters: &FilterSettings) -> &[Card] {
        self.clear();
        self.append(session, filters)
    }

    /// Forget all cards, e.g. when no session is active.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.rendered_upto = 0;
    }
}
