//! HTTP/JSON implementation of the post repository

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    domain::post::{NewPost, Post, PostId, PostPage, PostPatch},
    infrastructure::repository::{PostRepository, RepositoryError, RepositoryResult},
};

/// Talks to a dummyjson-compatible `/posts` resource
#[derive(Debug, Clone)]
pub struct HttpPostRepository {
    client: Client,
    base_url: String,
}

impl HttpPostRepository {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RepositoryResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| RepositoryError::Transport {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_url(&self, skip: u64, limit: u64) -> String {
        format!("{}/posts?limit={limit}&skip={skip}", self.base_url)
    }

    pub fn create_url(&self) -> String {
        format!("{}/posts/add", self.base_url)
    }

    pub fn update_url(&self, id: PostId) -> String {
        format!("{}/posts/{id}", self.base_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> RepositoryResult<T> {
        let response = request
            .send()
            .await
            .map_err(|source| RepositoryError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| RepositoryError::Transport {
                url: url.to_string(),
                source,
            })?;
        decode(url, &bytes)
    }

    /// Send `request` and accept any response; the status is only logged
    async fn acknowledge(&self, url: &str, request: RequestBuilder) -> RepositoryResult<()> {
        let response = request
            .send()
            .await
            .map_err(|source| RepositoryError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{url} responded with {status}; keeping the local edit");
        }
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(url: &str, bytes: &[u8]) -> RepositoryResult<T> {
    serde_json::from_slice(bytes).map_err(|e| RepositoryError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl PostRepository for HttpPostRepository {
    async fn fetch_page(&self, skip: u64, limit: u64) -> RepositoryResult<PostPage> {
        let url = self.page_url(skip, limit);
        log::debug!("GET {url}");
        self.send(&url, self.request(Method::GET, &url)).await
    }

    async fn create_post(&self, post: NewPost) -> RepositoryResult<Post> {
        let url = self.create_url();
        log::debug!("POST {url}");
        self.send(&url, self.request(Method::POST, &url).json(&post))
            .await
    }

    async fn update_post(&self, id: PostId, patch: PostPatch) -> RepositoryResult<()> {
        let url = self.update_url(id);
        log::debug!("PATCH {url}");
        self.acknowledge(&url, self.request(Method::PATCH, &url).json(&patch))
            .await
    }
}
