use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::domain::post::{NewPost, Post};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network round trips, terminal control, logging)
///
/// `update` only describes what should happen; `CmdExecutor` performs it and
/// feeds the outcome back as a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
pub enum Cmd {
    // Repository round trips
    FetchPage {
        skip: u64,
        limit: u64,
    },
    CreatePost(NewPost),
    /// Save the edited post; it is what the feed shows once the resource answers
    UpdatePost(Post),

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError {
        message: String,
    },
}

impl Cmd {
    /// Human-readable variant name for logs
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
