//! Feed state: the incremental pagination and reconciliation engine
//!
//! `FeedState` owns the authoritative post list and the page cursor. It acts
//! as a parent component that coordinates two children (`Pagination` and
//! `Selection`) and the post list itself:
//!
//! - fetched pages are appended at the end, minus any id already present
//! - created posts are inserted at the front, without deduplication
//! - updated posts replace their counterpart in place
//!
//! Network I/O never happens here. `advance_page` only decides whether a
//! request may go out and marks it in flight; the outcome comes back later as
//! `FeedMsg::PageLoaded` or `FeedMsg::PageFailed`.

pub mod pagination;
pub mod selection;

use std::collections::BTreeSet;

use crate::{
    core::{cmd::Cmd, msg::feed::FeedMsg},
    domain::{
        collections::PostList,
        post::{Post, PostPage},
    },
};

use pagination::{Message as PaginationMessage, Pagination};
use selection::{Message as SelectionMessage, Selection};

/// A page request the engine has committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u64,
}

impl From<PageRequest> for Cmd {
    fn from(request: PageRequest) -> Self {
        Cmd::FetchPage {
            skip: request.skip,
            limit: request.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    posts: PostList,
    pagination: Pagination,
    selection: Selection,
}

impl FeedState {
    pub fn new(page_size: u64) -> Self {
        Self {
            posts: PostList::new(),
            pagination: Pagination::new(page_size),
            selection: Selection::new(),
        }
    }

    pub fn posts(&self) -> &PostList {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.pagination.is_loading()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pagination.is_exhausted()
    }

    pub fn page_index(&self) -> u64 {
        self.pagination.page_index()
    }

    pub fn page_size(&self) -> u64 {
        self.pagination.page_size()
    }

    pub fn fetched_offsets(&self) -> &BTreeSet<u64> {
        self.pagination.fetched_offsets()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_index().and_then(|index| self.posts.get(index))
    }

    /// Commit to loading the next page, if allowed
    ///
    /// Returns `None` (and changes nothing) while a page is in flight, once
    /// the feed is exhausted, or when the next offset was already fetched.
    /// Otherwise marks the request in flight before returning it, so repeated
    /// calls cannot issue a second request for the same page.
    pub fn advance_page(&mut self) -> Option<PageRequest> {
        if !self.pagination.can_advance() {
            return None;
        }
        let request = PageRequest {
            skip: self.pagination.next_offset(),
            limit: self.pagination.page_size(),
        };
        self.pagination.update(PaginationMessage::LoadingStarted);
        Some(request)
    }

    /// Merge the page that was requested at `offset`
    ///
    /// Returns how many posts were actually appended. Results for an offset
    /// that is not in flight are dropped.
    pub fn merge_page(&mut self, offset: u64, page: PostPage) -> usize {
        if !self.pagination.is_in_flight(offset) {
            log::warn!(
                "Ignoring page at skip={offset}: expected skip={} (loading={})",
                self.pagination.next_offset(),
                self.pagination.is_loading()
            );
            return 0;
        }

        let received = page.len();
        let appended = self.posts.append_unique(page.posts);
        self.pagination.update(PaginationMessage::PageLoaded {
            offset,
            len: received,
        });

        log::info!(
            "Merged page at skip={offset}: received {received}, appended {appended}, total {}{}",
            self.posts.len(),
            if self.is_exhausted() { " (end of feed)" } else { "" }
        );
        appended
    }

    /// Release the in-flight flag after a failed fetch; nothing else changes
    pub fn page_failed(&mut self, offset: u64) {
        if !self.pagination.is_in_flight(offset) {
            log::warn!("Ignoring failure for skip={offset}: not in flight");
            return;
        }
        self.pagination.update(PaginationMessage::PageFailed);
    }

    /// Put a freshly created post at the top of the list
    pub fn insert_created(&mut self, post: Post) {
        self.posts.push_front(post);
        self.selection
            .update(SelectionMessage::ItemInserted { index: 0 });
    }

    /// Replace the post with the same id, keeping its position
    pub fn apply_updated(&mut self, post: Post) {
        let id = post.id;
        if self.posts.replace(post).is_none() {
            log::debug!("Update for post {id} ignored: not in the feed");
        }
    }

    /// Update the feed based on a message
    ///
    /// Returns the commands the runtime must execute (at most one fetch).
    pub fn update(&mut self, msg: FeedMsg) -> Vec<Cmd> {
        match msg {
            FeedMsg::AdvanceRequested => match self.advance_page() {
                Some(request) => vec![request.into()],
                None => vec![],
            },
            FeedMsg::PageLoaded { offset, page } => {
                self.merge_page(offset, page);
                vec![]
            }
            FeedMsg::PageFailed { offset, error } => {
                self.page_failed(offset);
                vec![Cmd::LogError {
                    message: format!("Failed to fetch posts at skip={offset}: {error}"),
                }]
            }
            FeedMsg::ItemCreated(post) => {
                self.insert_created(post);
                vec![]
            }
            FeedMsg::ItemUpdated(post) => {
                self.apply_updated(post);
                vec![]
            }
            FeedMsg::ScrollUp => {
                if !self.is_empty() {
                    self.selection
                        .update(SelectionMessage::PreviousItemSelected);
                }
                vec![]
            }
            FeedMsg::ScrollDown => {
                if !self.is_empty() {
                    let max_index = self.posts.len() - 1;
                    self.selection
                        .update(SelectionMessage::NextItemSelected { max_index });
                }
                vec![]
            }
            FeedMsg::ScrollToTop => {
                if !self.is_empty() {
                    self.selection.update(SelectionMessage::FirstItemSelected);
                }
                vec![]
            }
            FeedMsg::ScrollToBottom => {
                if !self.is_empty() {
                    let max_index = self.posts.len() - 1;
                    self.selection
                        .update(SelectionMessage::LastItemSelected { max_index });
                }
                vec![]
            }
            // Routed to the form by the top-level update
            FeedMsg::EditRequested(_) | FeedMsg::EditSelected => vec![],
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(crate::infrastructure::config::DEFAULT_PAGE_SIZE)
    }
}
