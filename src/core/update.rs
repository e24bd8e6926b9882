use crate::{
    core::cmd::Cmd,
    core::msg::{
        feed::FeedMsg,
        form::{FormMsg, SavedPost},
        system::SystemMsg,
        Msg,
    },
    core::state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Feed(feed_msg) => {
            let commands = update_feed(feed_msg, &mut state);
            (state, commands)
        }

        Msg::Form(form_msg) => {
            let commands = update_form(form_msg, &mut state);
            (state, commands)
        }
    }
}

fn update_feed(msg: FeedMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        FeedMsg::EditRequested(post) => state.form.update(FormMsg::OpenEdit(post)),
        FeedMsg::EditSelected => match state.selected_post().cloned() {
            Some(post) => state.form.update(FormMsg::OpenEdit(post)),
            None => vec![],
        },

        FeedMsg::PageFailed { offset, error } => {
            let status = format!("Failed to load posts: {error}");
            let mut commands = state.feed.update(FeedMsg::PageFailed { offset, error });
            commands.extend(state.system.update(SystemMsg::ShowError(status)));
            commands
        }

        msg if msg.is_scroll() => {
            if state.form.is_open() {
                return vec![];
            }
            let mut commands = state.feed.update(msg);
            // The feed guards absorb repeated signals while a page is in flight
            if state.is_near_bottom() {
                commands.extend(state.feed.update(FeedMsg::AdvanceRequested));
            }
            commands
        }

        other => state.feed.update(other),
    }
}

fn update_form(msg: FormMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        FormMsg::Saved(saved) => {
            let mut commands = state.form.update(FormMsg::Saved(saved.clone()));
            let status = match saved {
                SavedPost::Created(post) => {
                    let status = format!("[Added] {}", post.title);
                    commands.extend(state.feed.update(FeedMsg::ItemCreated(post)));
                    status
                }
                SavedPost::Updated(post) => {
                    let status = format!("[Updated] {}", post.title);
                    commands.extend(state.feed.update(FeedMsg::ItemUpdated(post)));
                    status
                }
            };
            commands.extend(state.system.update(SystemMsg::UpdateStatusMessage(status)));
            commands
        }

        FormMsg::SubmitFailed(error) => {
            let status = format!("Failed to save post: {error}");
            let mut commands = state.form.update(FormMsg::SubmitFailed(error));
            commands.extend(state.system.update(SystemMsg::ShowError(status)));
            commands
        }

        other => state.form.update(other),
    }
}
