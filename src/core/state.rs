use crate::{core::trigger::ScrollTrigger, domain::post::Post, infrastructure::config::Config};

pub mod feed;
pub mod form;
pub mod system;

use feed::FeedState;
use form::FormState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub feed: FeedState,
    pub form: FormState,
    pub system: SystemState,
    pub trigger: ScrollTrigger,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from a loaded configuration
    pub fn new_with_config(config: Config) -> Self {
        Self {
            feed: FeedState::new(config.page_size),
            form: FormState::new(config.user_id),
            system: SystemState::default(),
            trigger: ScrollTrigger::new(config.scroll_threshold),
            config: ConfigState { config },
        }
    }

    /// Get the selected post in the feed
    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.selected_post()
    }

    /// Whether the viewport sits close enough to the end to load more
    pub fn is_near_bottom(&self) -> bool {
        self.trigger
            .is_near_bottom(self.feed.selected_index(), self.feed.len())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new_with_config(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.feed.is_empty());
        assert!(!state.form.is_open());
        assert!(!state.system.should_quit);
        assert!(state.selected_post().is_none());
        assert!(state.is_near_bottom());
    }

    #[test]
    fn test_new_with_config() {
        let config = Config {
            page_size: 5,
            scroll_threshold: 1,
            user_id: 42,
            ..Default::default()
        };
        let state = AppState::new_with_config(config);

        assert_eq!(state.feed.page_size(), 5);
        assert_eq!(state.trigger.threshold(), 1);
        assert_eq!(state.form.user_id(), 42);
    }
}
