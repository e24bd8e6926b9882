use std::ops::RangeInclusive;

use pretty_assertions::assert_eq;

use postfeed::{
    core::msg::{
        feed::FeedMsg,
        form::{FormMsg, SavedPost},
        Msg,
    },
    domain::post::{NewPost, Post},
    infrastructure::config::Config,
    test_helpers::{apply_all, page, post},
    update, AppState, Cmd,
};

fn state_with_page_size(page_size: u64) -> AppState {
    AppState::new_with_config(Config {
        page_size,
        ..Default::default()
    })
}

fn loaded(offset: u64, ids: RangeInclusive<u64>) -> Msg {
    Msg::Feed(FeedMsg::PageLoaded {
        offset,
        page: page(offset, ids, 100),
    })
}

#[test]
fn test_feed_walks_pages_until_a_short_page() {
    let state = state_with_page_size(10);

    let (state, cmds) = apply_all(state, [Msg::Feed(FeedMsg::AdvanceRequested)]);
    assert_eq!(cmds, vec![Cmd::FetchPage { skip: 0, limit: 10 }]);

    let (state, _) = apply_all(state, [loaded(0, 1..=10)]);
    assert_eq!(state.feed.len(), 10);
    assert!(!state.feed.is_loading());

    // Jumping to the end is within the threshold band
    let (state, cmds) = apply_all(state, [Msg::Feed(FeedMsg::ScrollToBottom)]);
    assert_eq!(cmds, vec![Cmd::FetchPage { skip: 10, limit: 10 }]);

    let (state, _) = apply_all(state, [loaded(10, 11..=14)]);
    assert_eq!(state.feed.len(), 14);
    assert!(state.feed.is_exhausted());

    let (state, cmds) = apply_all(
        state,
        [
            Msg::Feed(FeedMsg::ScrollToBottom),
            Msg::Feed(FeedMsg::AdvanceRequested),
        ],
    );
    assert!(cmds.is_empty());
    assert_eq!(state.feed.page_index(), 2);
}

#[test]
fn test_rapid_scroll_requests_one_page() {
    let (state, _) = apply_all(
        state_with_page_size(10),
        [Msg::Feed(FeedMsg::AdvanceRequested), loaded(0, 1..=10)],
    );

    let (state, cmds) = apply_all(
        state,
        [
            Msg::Feed(FeedMsg::ScrollToBottom),
            Msg::Feed(FeedMsg::ScrollUp),
            Msg::Feed(FeedMsg::ScrollDown),
            Msg::Feed(FeedMsg::ScrollDown),
            Msg::Feed(FeedMsg::AdvanceRequested),
        ],
    );

    assert_eq!(cmds, vec![Cmd::FetchPage { skip: 10, limit: 10 }]);
    assert!(state.feed.is_loading());
}

#[test]
fn test_stale_page_is_dropped() {
    let (state, _) = apply_all(
        state_with_page_size(10),
        [Msg::Feed(FeedMsg::AdvanceRequested), loaded(0, 1..=10)],
    );

    // A second delivery of the first page must not duplicate anything
    let (state, _) = apply_all(state, [loaded(0, 1..=10)]);

    assert_eq!(state.feed.len(), 10);
    assert_eq!(state.feed.page_index(), 1);
}

#[test]
fn test_overlapping_pages_do_not_duplicate_posts() {
    let (state, _) = apply_all(
        state_with_page_size(5),
        [
            Msg::Feed(FeedMsg::AdvanceRequested),
            loaded(0, 1..=5),
            Msg::Feed(FeedMsg::AdvanceRequested),
            // Server shifted by one between requests
            loaded(5, 5..=9),
        ],
    );

    let ids: Vec<u64> = state.feed.posts().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert!(!state.feed.is_exhausted());
}

#[test]
fn test_failed_page_can_be_retried() {
    let (state, _) = apply_all(
        state_with_page_size(10),
        [
            Msg::Feed(FeedMsg::AdvanceRequested),
            Msg::Feed(FeedMsg::PageFailed {
                offset: 0,
                error: "connection reset".to_string(),
            }),
        ],
    );

    assert!(!state.feed.is_loading());
    assert!(state.feed.is_empty());
    assert!(state.system.is_error);
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("Failed to load posts: connection reset")
    );

    let (state, cmds) = apply_all(state, [Msg::Feed(FeedMsg::AdvanceRequested)]);
    assert_eq!(cmds, vec![Cmd::FetchPage { skip: 0, limit: 10 }]);
    assert!(state.feed.is_loading());
}

#[test]
fn test_create_flow_prepends_post() {
    let (state, _) = apply_all(
        state_with_page_size(10),
        [Msg::Feed(FeedMsg::AdvanceRequested), loaded(0, 1..=10)],
    );

    let mut msgs = vec![Msg::Form(FormMsg::OpenNew)];
    msgs.extend("Hello".chars().map(|c| Msg::Form(FormMsg::InsertChar(c))));
    msgs.push(Msg::Form(FormMsg::FocusNext));
    msgs.extend("World".chars().map(|c| Msg::Form(FormMsg::InsertChar(c))));
    msgs.push(Msg::Form(FormMsg::Submit));
    let (state, cmds) = apply_all(state, msgs);

    assert_eq!(
        cmds,
        vec![Cmd::CreatePost(NewPost {
            title: "Hello".to_string(),
            body: "World".to_string(),
            user_id: 1,
        })]
    );
    assert_eq!(
        state.form.draft().map(|d| d.submit_label()),
        Some("Adding...")
    );

    let created = Post::new(251, "Hello", "World", 1);
    let (state, _) = update(
        Msg::Form(FormMsg::Saved(SavedPost::Created(created.clone()))),
        state,
    );

    assert!(!state.form.is_open());
    assert_eq!(state.feed.len(), 11);
    assert_eq!(state.feed.posts().iter().next(), Some(&created));
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("[Added] Hello")
    );
}

#[test]
fn test_edit_flow_replaces_in_place() {
    let (state, _) = apply_all(
        state_with_page_size(10),
        [
            Msg::Feed(FeedMsg::AdvanceRequested),
            loaded(0, 1..=10),
            Msg::Feed(FeedMsg::ScrollDown),
            Msg::Feed(FeedMsg::ScrollDown),
            Msg::Feed(FeedMsg::EditSelected),
        ],
    );

    let draft = state.form.draft().cloned();
    assert_eq!(draft.as_ref().map(|d| d.heading()), Some("Edit Post"));
    assert_eq!(draft.map(|d| d.title), Some("title 2".to_string()));

    let (state, cmds) = apply_all(
        state,
        [
            Msg::Form(FormMsg::InsertChar('!')),
            Msg::Form(FormMsg::Submit),
        ],
    );
    assert_eq!(
        cmds,
        vec![Cmd::UpdatePost(post(2).edited("title 2!", "body 2"))]
    );

    let updated = post(2).edited("title 2!", "body 2");
    let (state, _) = update(
        Msg::Form(FormMsg::Saved(SavedPost::Updated(updated.clone()))),
        state,
    );

    assert_eq!(state.feed.len(), 10);
    assert_eq!(state.feed.posts().get(1), Some(&updated));
    assert_eq!(state.feed.selected_index(), Some(1));
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("[Updated] title 2!")
    );
}

#[test]
fn test_scrolling_is_ignored_while_form_is_open() {
    let (state, _) = apply_all(
        state_with_page_size(10),
        [
            Msg::Feed(FeedMsg::AdvanceRequested),
            loaded(0, 1..=10),
            Msg::Form(FormMsg::OpenNew),
        ],
    );

    let (state, cmds) = apply_all(state, [Msg::Feed(FeedMsg::ScrollToBottom)]);

    assert!(cmds.is_empty());
    assert_eq!(state.feed.selected_index(), None);
}
