use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{feed::FeedMsg, form::FormMsg, system::SystemMsg, Msg},
    raw_msg::RawMsg,
    state::AppState,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // Context-sensitive key bindings
    if state.form.is_open() {
        translate_form_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the form is open
fn translate_form_keys(key: KeyEvent) -> Vec<Msg> {
    let msg = match key.code {
        KeyCode::Esc => FormMsg::Close,
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => FormMsg::Submit,
        KeyCode::Tab | KeyCode::BackTab => FormMsg::FocusNext,
        KeyCode::Enter => FormMsg::NewLine,
        KeyCode::Backspace => FormMsg::Backspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            FormMsg::InsertChar(c)
        }
        _ => return vec![],
    };
    vec![Msg::Form(msg)]
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Char('q') => vec![Msg::System(SystemMsg::Quit)],
        KeyCode::Char('j') | KeyCode::Down => vec![Msg::Feed(FeedMsg::ScrollDown)],
        KeyCode::Char('k') | KeyCode::Up => vec![Msg::Feed(FeedMsg::ScrollUp)],
        KeyCode::Char('g') | KeyCode::Home => vec![Msg::Feed(FeedMsg::ScrollToTop)],
        KeyCode::Char('G') | KeyCode::End => vec![Msg::Feed(FeedMsg::ScrollToBottom)],
        KeyCode::Char('n') => vec![Msg::Form(FormMsg::OpenNew)],
        KeyCode::Char('e') | KeyCode::Enter => translate_edit_key(state),
        // Manual trigger, e.g. after a failed page
        KeyCode::Char('r') => vec![Msg::Feed(FeedMsg::AdvanceRequested)],
        KeyCode::Esc => vec![Msg::System(SystemMsg::ClearStatusMessage)],
        _ => vec![],
    }
}

/// Translate edit key with validation
fn translate_edit_key(state: &AppState) -> Vec<Msg> {
    match state.selected_post() {
        Some(post) => vec![Msg::Feed(FeedMsg::EditRequested(post.clone()))],
        None => vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "Cannot edit: No post selected".to_string(),
        ))],
    }
}
