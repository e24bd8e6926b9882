//! Post form component
//!
//! Renders the create/edit form as a centered popup over the feed.

use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::core::state::{
    form::{Draft, FormField},
    AppState,
};

#[derive(Debug, Clone, Default)]
pub struct PostFormComponent;

impl PostFormComponent {
    pub fn new() -> Self {
        Self
    }

    /// Popup area: `percent_x` by `percent_y` of `area`, centered
    pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(draft) = state.form.draft() else {
            return;
        };

        let popup = Self::popup_area(area, 70, 60);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .title(draft.heading())
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [title_area, body_area, button_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Self::field("Title", &draft.title, draft.focus == FormField::Title),
            title_area,
        );
        frame.render_widget(
            Self::field("Body", &draft.body, draft.focus == FormField::Body),
            body_area,
        );
        frame.render_widget(Self::button(draft), button_area);
    }

    fn field<'a>(label: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut text = Text::from(value);
        if focused {
            // Cursor marker at the end of the focused field
            text.push_span(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(label).border_style(border_style))
    }

    fn button(draft: &Draft) -> Paragraph<'static> {
        let style = if draft.submitting || !draft.is_valid() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(Color::Green)
        };
        Paragraph::new(Line::from(Span::styled(format!(" {} ", draft.submit_label()), style)))
            .alignment(Alignment::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_popup_area_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = PostFormComponent::popup_area(area, 70, 60);

        assert_eq!(popup, Rect::new(15, 10, 70, 30));
    }
}
