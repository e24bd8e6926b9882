use std::collections::HashSet;
use std::fmt;
use std::ops::{Deref, Index};
use std::slice::Iter;
use std::vec::IntoIter;

use crate::domain::post::{Post, PostId};

/// An ordered list of posts with id-based deduplication
///
/// Insertion order is preserved and drives render order. The id index gives
/// O(1) duplicate checks; `posts` and `post_ids` always hold the same ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostList {
    posts: Vec<Post>,
    post_ids: HashSet<PostId>,
}

impl PostList {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            post_ids: HashSet::new(),
        }
    }

    /// Appends a post at the end (ignores duplicates)
    /// Returns: true if the post was actually appended, false if its id was already present
    pub fn push(&mut self, post: Post) -> bool {
        if self.post_ids.insert(post.id) {
            self.posts.push(post);
            true
        } else {
            false
        }
    }

    /// Appends every post whose id is not yet present, in iteration order
    /// Returns: the number of posts appended
    pub fn append_unique<I>(&mut self, posts: I) -> usize
    where
        I: IntoIterator<Item = Post>,
    {
        posts
            .into_iter()
            .map(|post| self.push(post))
            .filter(|appended| *appended)
            .count()
    }

    /// Inserts a post at index 0 without checking for duplicates
    ///
    /// The caller guarantees the id is new. If it is not, the list keeps both
    /// entries and the id index still reports the id as present.
    pub fn push_front(&mut self, post: Post) {
        self.post_ids.insert(post.id);
        self.posts.insert(0, post);
    }

    /// Replaces the post sharing `post.id`, keeping its position
    /// Returns: the index that was replaced, or None when no post matched
    pub fn replace(&mut self, post: Post) -> Option<usize> {
        if !self.post_ids.contains(&post.id) {
            return None;
        }
        let index = self.position(post.id)?;
        self.posts[index] = post;
        Some(index)
    }

    /// Checks if a post id is contained in the list
    pub fn contains(&self, id: &PostId) -> bool {
        self.post_ids.contains(id)
    }

    /// Finds the index of the post with the given id
    pub fn position(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }

    /// Returns a reference to the internal Vec (read-only)
    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }
}

// === Standard library trait implementations ===

impl Default for PostList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PostList {
    type Target = [Post];

    fn deref(&self) -> &Self::Target {
        &self.posts
    }
}

impl Index<usize> for PostList {
    type Output = Post;

    fn index(&self, index: usize) -> &Self::Output {
        &self.posts[index]
    }
}

impl AsRef<[Post]> for PostList {
    fn as_ref(&self) -> &[Post] {
        &self.posts
    }
}

impl IntoIterator for PostList {
    type Item = Post;
    type IntoIter = IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

impl<'a> IntoIterator for &'a PostList {
    type Item = &'a Post;
    type IntoIter = Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

impl FromIterator<Post> for PostList {
    fn from_iter<T: IntoIterator<Item = Post>>(iter: T) -> Self {
        let mut posts = Self::new();
        posts.append_unique(iter);
        posts
    }
}

impl Extend<Post> for PostList {
    fn extend<T: IntoIterator<Item = Post>>(&mut self, iter: T) {
        self.append_unique(iter);
    }
}

impl fmt::Display for PostList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostList[{} posts]", self.len())
    }
}
