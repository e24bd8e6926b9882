//! Status bar component
//!
//! Displays status information at the bottom of the screen.
//! This is a pure, stateless component that renders status data from AppState.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::widgets::status_bar::{StatusBarWidget, ViewContext},
};

/// Status bar component
///
/// Displays the feed summary, key hints, and the latest status message.
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    /// Create a new status bar component
    pub fn new() -> Self {
        Self
    }

    pub fn view_context(state: &AppState) -> ViewContext<'_> {
        ViewContext {
            message: state.system.status_message.as_deref(),
            is_error: state.system.is_error,
            post_count: state.feed.len(),
            is_loading: state.feed.is_loading(),
            is_exhausted: state.feed.is_exhausted(),
            form_open: state.form.is_open(),
        }
    }

    /// Render the status bar into the bottom two rows of `area`
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        frame.render_widget(StatusBarWidget::new(Self::view_context(state)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::system::SystemMsg;

    #[test]
    fn test_view_context_reflects_state() {
        let mut state = AppState::default();
        state.system.update(SystemMsg::ShowError("boom".to_string()));

        let ctx = StatusBarComponent::view_context(&state);
        assert_eq!(ctx.message, Some("boom"));
        assert!(ctx.is_error);
        assert_eq!(ctx.post_count, 0);
        assert!(!ctx.form_open);
    }
}
