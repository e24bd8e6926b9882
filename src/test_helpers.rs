//! Fixtures and an in-memory repository for unit and integration tests

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::{
    core::{cmd::Cmd, msg::Msg, state::AppState, update::update},
    domain::post::{NewPost, Post, PostId, PostPage, PostPatch},
    infrastructure::repository::{PostRepository, RepositoryError, RepositoryResult},
};

/// A post with predictable title and body
pub fn post(id: PostId) -> Post {
    Post::new(id, format!("title {id}"), format!("body {id}"), 1)
}

pub fn posts(ids: impl IntoIterator<Item = PostId>) -> Vec<Post> {
    ids.into_iter().map(post).collect()
}

/// A page as the resource would return it for `skip`
pub fn page(skip: u64, ids: impl IntoIterator<Item = PostId>, total: u64) -> PostPage {
    let posts = posts(ids);
    PostPage {
        limit: posts.len() as u64,
        posts,
        total,
        skip,
    }
}

/// Feed a sequence of messages through `update`, collecting every command
pub fn apply_all(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> (AppState, Vec<Cmd>) {
    msgs.into_iter().fold((state, Vec::new()), |(state, mut cmds), msg| {
        let (state, new_cmds) = update(msg, state);
        cmds.extend(new_cmds);
        (state, cmds)
    })
}

#[derive(Debug, Default)]
struct Inner {
    posts: Vec<Post>,
    fetch_failures: VecDeque<String>,
    mutation_failures: VecDeque<String>,
    requested_offsets: Vec<u64>,
    discard_creates: bool,
    updated_ids: Vec<PostId>,
}

/// Repository backed by a `Vec<Post>`
///
/// Pages are sliced from the stored posts. Failures can be scripted per call
/// and every requested offset is recorded. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryPostRepository {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                posts,
                ..Default::default()
            })),
        }
    }

    /// Make the next `fetch_page` fail with `message`
    pub fn fail_next_fetch(&self, message: impl Into<String>) {
        self.lock().fetch_failures.push_back(message.into());
    }

    /// Make the next create or update fail with `message`
    pub fn fail_next_mutation(&self, message: impl Into<String>) {
        self.lock().mutation_failures.push_back(message.into());
    }

    /// Answer creates without storing them, like a read-only demo resource
    ///
    /// Every created post then gets the same id, one past the stored ones.
    pub fn discard_creates(&self) {
        self.lock().discard_creates = true;
    }

    /// Ids passed to `update_post`, in call order
    pub fn updated_ids(&self) -> Vec<PostId> {
        self.lock().updated_ids.clone()
    }

    /// Offsets passed to `fetch_page`, in call order
    pub fn requested_offsets(&self) -> Vec<u64> {
        self.lock().requested_offsets.clone()
    }

    pub fn stored(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn fetch_page(&self, skip: u64, limit: u64) -> RepositoryResult<PostPage> {
        let mut inner = self.lock();
        inner.requested_offsets.push(skip);
        if let Some(message) = inner.fetch_failures.pop_front() {
            return Err(RepositoryError::Other(message));
        }

        let total = inner.posts.len() as u64;
        let posts: Vec<Post> = inner
            .posts
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(PostPage {
            posts,
            total,
            skip,
            limit,
        })
    }

    async fn create_post(&self, new_post: NewPost) -> RepositoryResult<Post> {
        let mut inner = self.lock();
        if let Some(message) = inner.mutation_failures.pop_front() {
            return Err(RepositoryError::Other(message));
        }

        let id = inner.posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        let post = Post::new(id, new_post.title, new_post.body, new_post.user_id);
        if !inner.discard_creates {
            inner.posts.push(post.clone());
        }
        Ok(post)
    }

    async fn update_post(&self, id: PostId, patch: PostPatch) -> RepositoryResult<()> {
        let mut inner = self.lock();
        if let Some(message) = inner.mutation_failures.pop_front() {
            return Err(RepositoryError::Other(message));
        }

        inner.updated_ids.push(id);
        match inner.posts.iter_mut().find(|post| post.id == id) {
            Some(stored) => *stored = stored.edited(patch.title, patch.body),
            None => log::debug!("memory://posts/{id} is unknown; answering without storing"),
        }
        Ok(())
    }
}
