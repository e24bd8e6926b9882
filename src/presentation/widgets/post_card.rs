use ratatui::{prelude::*, widgets::*};

use crate::domain::{
    post::Post,
    text::{truncate_text, wrap_text, wrapped_height},
};

/// Upper bound on body lines shown per card
pub const MAX_BODY_LINES: usize = 6;

#[derive(Clone, Debug)]
pub struct PostCard {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub padding: Padding, // Only use to calc width/height
    pub highlight: bool,
}

impl PostCard {
    /// Build a card from a post, dropping terminal escape sequences from
    /// remote text
    pub fn new(post: &Post, padding: Padding) -> Self {
        PostCard {
            id: post.id,
            title: strip_ansi_escapes::strip_str(&post.title),
            body: strip_ansi_escapes::strip_str(&post.body),
            padding,
            highlight: false,
        }
    }

    fn content_width(&self, area: &Rect) -> usize {
        area.width
            .saturating_sub(self.padding.left + self.padding.right) as usize
    }

    fn body_text(&self, width: usize) -> String {
        truncate_text(&wrap_text(&self.body, width), MAX_BODY_LINES)
    }

    pub fn calculate_height(&self, area: &Rect) -> u16 {
        let width = self.content_width(area);
        let title_lines = wrapped_height(&self.title, width).max(1);
        let body_lines = wrapped_height(&self.body, width).min(MAX_BODY_LINES);

        // title + body + separator
        (title_lines + body_lines + 1) as u16
    }
}

impl Widget for PostCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let mut text = Text::default();

        let title_style = if self.highlight {
            Style::default().bold().fg(Color::Yellow)
        } else {
            Style::default().bold()
        };
        for line in wrap_text(&self.title, width).lines() {
            text.extend(Text::from(Line::styled(line.to_string(), title_style)));
        }

        text.extend(Text::from(self.body_text(width)));

        text.extend(Text::styled(
            "\u{2500}".repeat(width),
            Style::default().fg(Color::Gray),
        ));

        let style = if self.highlight {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        Paragraph::new(text).style(style).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[fixture]
    fn padding() -> Padding {
        Padding::new(0, 0, 0, 0)
    }

    #[rstest]
    #[case("short", 3)]
    #[case("one\ntwo\nthree", 5)]
    #[case("a\nb\nc\nd\ne\nf\ng\nh", 8)]
    fn test_calculate_height(padding: Padding, #[case] body: &str, #[case] expected: u16) {
        let card = PostCard::new(&Post::new(1, "Title", body, 1), padding);
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(card.calculate_height(&area), expected);
    }

    #[rstest]
    fn test_escape_sequences_are_stripped(padding: Padding) {
        let post = Post::new(1, "\u{1b}[31mred\u{1b}[0m", "plain", 1);
        let card = PostCard::new(&post, padding);
        assert_eq!(card.title, "red");
    }

    #[rstest]
    fn test_render(padding: Padding) {
        let card = PostCard::new(&Post::new(1, "Hello", "World", 1), padding);
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        let expected = Buffer::with_lines(["Hello", "World", "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}"]);
        assert_eq!(buf.content().len(), expected.content().len());
        for (actual, expected) in buf.content().iter().zip(expected.content()) {
            assert_eq!(actual.symbol(), expected.symbol());
        }
    }
}
