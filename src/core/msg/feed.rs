use serde::{Deserialize, Serialize};

use crate::domain::post::{Post, PostPage};

/// Messages handled by the feed (pagination and reconciliation engine)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedMsg {
    /// Mount or near-bottom signal: load the next page if the guards allow it
    AdvanceRequested,
    /// The page requested at `offset` arrived
    PageLoaded { offset: u64, page: PostPage },
    /// The page requested at `offset` could not be fetched or decoded
    PageFailed { offset: u64, error: String },

    /// A post was created remotely and should appear at the top
    ItemCreated(Post),
    /// A post was updated remotely and should be replaced in place
    ItemUpdated(Post),

    /// Open the form pre-filled with this post
    EditRequested(Post),
    /// Open the form pre-filled with the selected post
    EditSelected,

    // Scroll operations
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
}

impl FeedMsg {
    /// Whether this message moves the viewport (and may bring the bottom into range)
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            FeedMsg::ScrollUp | FeedMsg::ScrollDown | FeedMsg::ScrollToTop | FeedMsg::ScrollToBottom
        )
    }
}
