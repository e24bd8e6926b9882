//! Post repository seam
//!
//! The controller never talks HTTP directly; it goes through [`PostRepository`]
//! so tests can substitute an in-memory implementation.

use async_trait::async_trait;

use crate::domain::post::{NewPost, Post, PostId, PostPage, PostPatch};

/// Failure of a single repository round trip
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The resource answered with a non-success status
    #[error("{url} responded with {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON shape
    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// Failure raised by a non-HTTP implementation
    #[error("{0}")]
    Other(String),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Remote operations on the posts resource
///
/// Each call is a single request/response round trip with no retry of its own.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch `limit` posts starting at `skip`
    async fn fetch_page(&self, skip: u64, limit: u64) -> RepositoryResult<PostPage>;

    /// Create a post; the resource assigns its id
    async fn create_post(&self, post: NewPost) -> RepositoryResult<Post>;

    /// Replace title and body of an existing post
    ///
    /// Succeeds once the resource has answered, whatever the status; only a
    /// request that got no response is an error. The caller keeps its own
    /// copy of the edited post.
    async fn update_post(&self, id: PostId, patch: PostPatch) -> RepositoryResult<()>;
}
