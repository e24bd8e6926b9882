//! Post list component
//!
//! Displays the feed as a scrollable list of cards, with a footer that
//! reports loading and end-of-feed.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListView};

use crate::{core::state::AppState, presentation::widgets::post_card::PostCard};

pub const LOADING_TEXT: &str = "Loading more posts...";
pub const EXHAUSTED_TEXT: &str = "No more posts to show!";
pub const EMPTY_TEXT: &str = "No posts to display";

/// Post list component
///
/// This is a stateless component that renders feed data from AppState.
#[derive(Debug, Clone, Default)]
pub struct PostListComponent;

impl PostListComponent {
    pub fn new() -> Self {
        Self
    }

    /// Footer line under the list, if any
    pub fn footer(state: &AppState) -> Option<&'static str> {
        if state.feed.is_loading() {
            Some(LOADING_TEXT)
        } else if state.feed.is_exhausted() {
            Some(EXHAUSTED_TEXT)
        } else {
            None
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let footer = Self::footer(state);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(u16::from(footer.is_some())),
            ])
            .split(area);

        if let Some(footer) = footer {
            let footer = Paragraph::new(footer)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(footer, chunks[1]);
        }

        self.view_list(state, frame, chunks[0]);
    }

    fn view_list(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let padding = Padding::new(1, 1, 1, 0);
        let item_count = state.feed.len();

        if item_count == 0 {
            if state.feed.is_loading() {
                return;
            }
            let empty_block = Block::default().padding(padding);
            let empty_text = Paragraph::new(EMPTY_TEXT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);

            let inner = empty_block.inner(area);
            frame.render_widget(empty_block, area);
            frame.render_widget(empty_text, inner);
            return;
        }

        let cards: Vec<_> = state
            .feed
            .posts()
            .iter()
            .map(|post| {
                let card = PostCard::new(post, padding);
                let height = card.calculate_height(&area);
                (card, height)
            })
            .collect();

        let builder = ListBuilder::new(move |context| {
            let mut item = cards[context.index].clone();
            item.0.highlight = context.is_selected;
            (item.0, item.1)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(state.feed.selected_index());

        let list = ListView::new(builder, item_count)
            .block(Block::default().padding(padding))
            .style(Style::default().fg(Color::White));

        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
