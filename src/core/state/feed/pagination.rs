//! Page cursor state for the feed
//!
//! This module follows the Elm Architecture pattern:
//! - State changes only through the `update` function
//! - All state transitions are explicitly defined as `Message` variants
//! - The module is self-contained and doesn't know about the post list

use std::collections::BTreeSet;

/// Messages that can be sent to update the pagination state
///
/// Following Elm conventions, messages are named in past tense
/// to indicate "what happened" rather than "what to do"
pub enum Message {
    /// A request for the page at `next_offset()` was issued
    LoadingStarted,
    /// The in-flight page arrived with `len` posts
    PageLoaded { offset: u64, len: usize },
    /// The in-flight page failed; it stays eligible for a retry
    PageFailed,
}

/// Which page to request next, and whether requesting is allowed at all
///
/// Invariants:
/// - at most one request is in flight (`loading`)
/// - `fetched_offsets` only grows
/// - `exhausted` never goes back to false
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: u64,
    page_size: u64,
    fetched_offsets: BTreeSet<u64>,
    exhausted: bool,
    loading: bool,
}

impl Pagination {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_index: 0,
            page_size,
            fetched_offsets: BTreeSet::new(),
            exhausted: false,
            loading: false,
        }
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn fetched_offsets(&self) -> &BTreeSet<u64> {
        &self.fetched_offsets
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Skip offset of the next page to request
    pub fn next_offset(&self) -> u64 {
        self.page_index * self.page_size
    }

    /// Whether a new page request may be issued right now
    pub fn can_advance(&self) -> bool {
        !self.loading && !self.exhausted && !self.fetched_offsets.contains(&self.next_offset())
    }

    /// Whether `offset` is the page currently in flight
    pub fn is_in_flight(&self, offset: u64) -> bool {
        self.loading && offset == self.next_offset()
    }

    /// Update the pagination state based on a message
    pub fn update(&mut self, message: Message) {
        match message {
            Message::LoadingStarted => {
                self.loading = true;
            }
            Message::PageLoaded { offset, len } => {
                self.fetched_offsets.insert(offset);
                // A short page is the only end-of-data signal; `total` is not consulted
                if (len as u64) < self.page_size {
                    self.exhausted = true;
                }
                self.page_index += 1;
                self.loading = false;
            }
            Message::PageFailed => {
                self.loading = false;
            }
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(crate::infrastructure::config::DEFAULT_PAGE_SIZE)
    }
}
