use crate::client::router::PATH_SEGMENT;
use crate::domain::PostSummary;
use crate::error::{BlogError, Result};
use async_trait::async_trait;
use percent_encoding::utf8_percent_encode;
use reqwest::{Client, StatusCode};

// the client's view of the content store, faked in tests
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `GET /api/posts`
    async fn fetch_index(&self) -> Result<Vec<PostSummary>>;
    /// `GET /api/posts/{slug}`, `BlogError::PostNotFound` on a 404
    async fn fetch_body(&self, slug: &str) -> Result<String>;
}

pub struct HttpPostsApi {
    client: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn fetch_index(&self) -> Result<Vec<PostSummary>> {
        let url = format!("{}/api/posts", self.base_url);
        tracing::debug!("Fetching post index from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(BlogError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Vec<PostSummary>>().await?)
    }

    async fn fetch_body(&self, slug: &str) -> Result<String> {
        let url = format!(
            "{}/api/posts/{}",
            self.base_url,
            utf8_percent_encode(slug, PATH_SEGMENT)
        );
        tracing::debug!("Fetching post body from {}", url);

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(BlogError::PostNotFound),
            status if !status.is_success() => Err(BlogError::Status(status.as_u16())),
            _ => Ok(response.text().await?),
        }
    }
}
