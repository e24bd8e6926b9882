//! # Postfeed - a terminal feed of remote posts
//!
//! Browses a paginated `/posts` resource page by page, loading more as the
//! selection nears the bottom, and creates or edits posts through a popup form.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): application state, including the feed engine
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (HTTP requests, terminal resize)
//! - **View** (`presentation`): rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use postfeed::{core::msg::feed::FeedMsg, update, AppState, Cmd, Msg};
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Feed(FeedMsg::AdvanceRequested), state);
//!
//! assert!(state.feed.is_loading());
//! assert_eq!(commands, vec![Cmd::FetchPage { skip: 0, limit: 20 }]);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Posts, pages and text helpers
//! - [`infrastructure`] - Config, CLI, HTTP repository and terminal
//! - [`integration`] - Runtime and the application runner
//! - [`presentation`] - Components and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
