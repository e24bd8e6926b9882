//! Create/edit form state
//!
//! The draft buffers are plain strings that live only while the form is
//! open. Saving goes through the repository; the result is reconciled into
//! the feed by the top-level update.

use crate::{
    core::{cmd::Cmd, msg::form::FormMsg},
    domain::post::{NewPost, Post},
};

/// Whether the form creates a new post or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Post),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Body,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Body,
            FormField::Body => FormField::Title,
        }
    }
}

/// An open form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub mode: FormMode,
    pub title: String,
    pub body: String,
    pub focus: FormField,
    pub submitting: bool,
}

impl Draft {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            body: String::new(),
            focus: FormField::Title,
            submitting: false,
        }
    }

    pub fn editing(post: Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
            mode: FormMode::Edit(post),
            focus: FormField::Title,
            submitting: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Post"
        } else {
            "Add New Post"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.is_edit(), self.submitting) {
            (true, true) => "Updating...",
            (true, false) => "Update",
            (false, true) => "Adding...",
            (false, false) => "Add",
        }
    }

    /// Both fields must contain something other than whitespace
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Body => &mut self.body,
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    user_id: u64,
    draft: Option<Draft>,
}

impl FormState {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            draft: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Form-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FormMsg) -> Vec<Cmd> {
        match msg {
            FormMsg::OpenNew => {
                self.draft = Some(Draft::new());
                vec![]
            }
            FormMsg::OpenEdit(post) => {
                self.draft = Some(Draft::editing(post));
                vec![]
            }
            FormMsg::Close => {
                self.draft = None;
                vec![]
            }

            FormMsg::InsertChar(c) => {
                if let Some(draft) = self.editable_draft() {
                    draft.focused_mut().push(c);
                }
                vec![]
            }
            FormMsg::Backspace => {
                if let Some(draft) = self.editable_draft() {
                    draft.focused_mut().pop();
                }
                vec![]
            }
            FormMsg::NewLine => {
                if let Some(draft) = self.editable_draft() {
                    match draft.focus {
                        FormField::Title => draft.focus = FormField::Body,
                        FormField::Body => draft.body.push('\n'),
                    }
                }
                vec![]
            }
            FormMsg::FocusNext => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.focus = draft.focus.next();
                }
                vec![]
            }

            FormMsg::Submit => self.submit(),
            FormMsg::Saved(_) => {
                self.draft = None;
                vec![]
            }
            FormMsg::SubmitFailed(error) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.submitting = false;
                }
                vec![Cmd::LogError {
                    message: format!("Post submission failed: {error}"),
                }]
            }
        }
    }

    /// The open draft, unless a submit is in flight
    fn editable_draft(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut().filter(|draft| !draft.submitting)
    }

    fn submit(&mut self) -> Vec<Cmd> {
        let user_id = self.user_id;
        let Some(draft) = self.draft.as_mut() else {
            return vec![];
        };
        if draft.submitting || !draft.is_valid() {
            return vec![];
        }
        draft.submitting = true;

        let cmd = match &draft.mode {
            FormMode::Create => Cmd::CreatePost(NewPost {
                title: draft.title.clone(),
                body: draft.body.clone(),
                user_id,
            }),
            FormMode::Edit(post) => {
                Cmd::UpdatePost(post.edited(draft.title.clone(), draft.body.clone()))
            }
        };
        vec![cmd]
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(crate::infrastructure::config::DEFAULT_USER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::form::SavedPost;
    use pretty_assertions::assert_eq;

    fn type_text(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.update(FormMsg::InsertChar(c));
        }
    }

    #[test]
    fn test_open_new_is_empty() {
        let mut form = FormState::new(1);
        form.update(FormMsg::OpenNew);

        let draft = form.draft().expect("open");
        assert_eq!(draft.mode, FormMode::Create);
        assert_eq!(draft.title, "");
        assert_eq!(draft.heading(), "Add New Post");
        assert_eq!(draft.submit_label(), "Add");
    }

    #[test]
    fn test_open_edit_prefills() {
        let mut form = FormState::new(1);
        let post = Post::new(3, "title", "body", 9);
        form.update(FormMsg::OpenEdit(post.clone()));

        let draft = form.draft().expect("open");
        assert_eq!(draft.title, "title");
        assert_eq!(draft.body, "body");
        assert_eq!(draft.mode, FormMode::Edit(post));
        assert_eq!(draft.heading(), "Edit Post");
        assert_eq!(draft.submit_label(), "Update");
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = FormState::new(1);
        form.update(FormMsg::OpenNew);
        type_text(&mut form, "Hi");
        form.update(FormMsg::NewLine);
        type_text(&mut form, "line1");
        form.update(FormMsg::NewLine);
        type_text(&mut form, "line2x");
        form.update(FormMsg::Backspace);

        let draft = form.draft().expect("open");
        assert_eq!(draft.title, "Hi");
        assert_eq!(draft.body, "line1\nline2");
        assert_eq!(draft.focus, FormField::Body);
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = FormState::new(1);
        form.update(FormMsg::OpenNew);
        type_text(&mut form, "   ");
        form.update(FormMsg::FocusNext);
        type_text(&mut form, "body");

        assert!(form.update(FormMsg::Submit).is_empty());
        assert!(!form.draft().expect("open").submitting);
    }

    #[test]
    fn test_submit_create() {
        let mut form = FormState::new(7);
        form.update(FormMsg::OpenNew);
        type_text(&mut form, "T");
        form.update(FormMsg::FocusNext);
        type_text(&mut form, "B");

        let cmds = form.update(FormMsg::Submit);

        assert_eq!(
            cmds,
            vec![Cmd::CreatePost(NewPost {
                title: "T".to_string(),
                body: "B".to_string(),
                user_id: 7,
            })]
        );
        let draft = form.draft().expect("still open while submitting");
        assert!(draft.submitting);
        assert_eq!(draft.submit_label(), "Adding...");
    }

    #[test]
    fn test_submit_edit_and_double_submit() {
        let mut form = FormState::new(1);
        form.update(FormMsg::OpenEdit(Post::new(3, "a", "b", 1)));
        type_text(&mut form, "!");

        let first = form.update(FormMsg::Submit);
        let second = form.update(FormMsg::Submit);

        assert_eq!(
            first,
            vec![Cmd::UpdatePost(Post::new(3, "a!", "b", 1))]
        );
        assert!(second.is_empty());
    }

    #[test]
    fn test_input_is_ignored_while_submitting() {
        let mut form = FormState::new(1);
        form.update(FormMsg::OpenEdit(Post::new(3, "a", "b", 1)));
        form.update(FormMsg::Submit);
        type_text(&mut form, "zzz");

        assert_eq!(form.draft().expect("open").title, "a");
    }

    #[test]
    fn test_failure_keeps_form_open() {
        let mut form = FormState::new(1);
        form.update(FormMsg::OpenEdit(Post::new(3, "a", "b", 1)));
        form.update(FormMsg::Submit);

        let cmds = form.update(FormMsg::SubmitFailed("404".to_string()));

        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));
        let draft = form.draft().expect("still open");
        assert!(!draft.submitting);
        assert_eq!(draft.title, "a");
    }

    #[test]
    fn test_saved_and_close() {
        let mut form = FormState::new(1);
        form.update(FormMsg::OpenNew);
        form.update(FormMsg::Saved(SavedPost::Created(Post::new(1, "a", "b", 1))));
        assert!(!form.is_open());

        form.update(FormMsg::OpenNew);
        form.update(FormMsg::Close);
        assert!(!form.is_open());
    }
}
