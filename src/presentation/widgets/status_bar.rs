use ratatui::{prelude::*, widgets::Paragraph};

const NORMAL_HINTS: &str = "j/k: move  n: new  e: edit  r: load more  q: quit";
const FORM_HINTS: &str = "Tab: next field  Ctrl-S: save  Esc: cancel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext<'a> {
    pub message: Option<&'a str>,
    pub is_error: bool,
    pub post_count: usize,
    pub is_loading: bool,
    pub is_exhausted: bool,
    pub form_open: bool,
}

pub struct StatusBarWidget<'a> {
    ctx: ViewContext<'a>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(ctx: ViewContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn summary(&self) -> String {
        let suffix = if self.ctx.is_loading {
            " (loading)"
        } else if self.ctx.is_exhausted {
            " (all loaded)"
        } else {
            ""
        };
        format!("{} posts{suffix}", self.ctx.post_count)
    }

    pub fn hints(&self) -> &'static str {
        if self.ctx.form_open {
            FORM_HINTS
        } else {
            NORMAL_HINTS
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // Main content area (not used by status bar)
                Constraint::Length(1), // Summary and key hints
                Constraint::Length(1), // Status message line
            ],
        )
        .split(area);

        let info = Line::from(vec![
            Span::styled(self.summary(), Style::default().fg(Color::Gray).italic()),
            Span::raw("  "),
            Span::styled(self.hints(), Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(info)
            .style(Style::default().bg(Color::Black))
            .render(layout[1], buf);

        let style = if self.ctx.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        Paragraph::new(self.ctx.message.unwrap_or_default())
            .style(style)
            .render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx<'a>() -> ViewContext<'a> {
        ViewContext {
            message: None,
            is_error: false,
            post_count: 20,
            is_loading: false,
            is_exhausted: false,
            form_open: false,
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(StatusBarWidget::new(ctx()).summary(), "20 posts");
        assert_eq!(
            StatusBarWidget::new(ViewContext {
                is_loading: true,
                ..ctx()
            })
            .summary(),
            "20 posts (loading)"
        );
        assert_eq!(
            StatusBarWidget::new(ViewContext {
                is_exhausted: true,
                ..ctx()
            })
            .summary(),
            "20 posts (all loaded)"
        );
    }

    #[test]
    fn test_hints_follow_form() {
        assert_eq!(StatusBarWidget::new(ctx()).hints(), NORMAL_HINTS);
        assert_eq!(
            StatusBarWidget::new(ViewContext {
                form_open: true,
                ..ctx()
            })
            .hints(),
            FORM_HINTS
        );
    }

    #[test]
    fn test_render_message() {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(ViewContext {
            message: Some("[Added] hi"),
            ..ctx()
        })
        .render(area, &mut buf);

        let last_row: String = (0..10).map(|x| buf[(x, 2)].symbol()).collect();
        assert_eq!(last_row, "[Added] hi");
    }
}
