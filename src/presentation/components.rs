//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod post_form;
pub mod post_list;
pub mod status_bar;

pub use post_form::PostFormComponent;
pub use post_list::PostListComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
///
/// This struct holds instances of all components used in the application.
/// Components are stateless and receive state as parameters during render.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub list: PostListComponent,
    pub form: PostFormComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        // Create layout: [feed, status bar (2 rows)]
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Feed
                Constraint::Length(2), // Status bar (2 rows)
            ])
            .split(area);

        self.list.view(state, frame, layout[0]);

        // Form overlays the feed while open
        self.form.view(state, frame, layout[0]);

        self.status_bar.view(state, frame, layout[1]);
    }
}
