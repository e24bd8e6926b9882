use serde::{Deserialize, Serialize};

use crate::domain::post::Post;

/// Outcome of a successful form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavedPost {
    Created(Post),
    Updated(Post),
}

/// Messages handled by the create/edit form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormMsg {
    /// Open an empty form for a new post
    OpenNew,
    /// Open the form pre-filled with an existing post
    OpenEdit(Post),
    /// Dismiss the form without saving
    Close,

    // Editing the focused field
    InsertChar(char),
    Backspace,
    NewLine,
    FocusNext,

    /// Send the draft to the repository
    Submit,
    /// The repository accepted the draft
    Saved(SavedPost),
    /// The repository round trip failed; the draft stays open
    SubmitFailed(String),
}
