use crate::client::api::PostsApi;
use crate::domain::PostSummary;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The client's copy of the post index.
///
/// Filled by the first view that needs it and reused across route changes
/// until someone calls [`PostCache::invalidate`] or [`PostCache::refresh`].
#[derive(Default)]
pub struct PostCache {
    posts: RwLock<Option<Arc<Vec<PostSummary>>>>,
}

impl PostCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached index, fetching it first if nothing is loaded.
    pub async fn get_or_load<A>(&self, api: &A) -> Result<Arc<Vec<PostSummary>>>
    where
        A: PostsApi + ?Sized,
    {
        if let Some(posts) = self.posts.read().await.as_ref() {
            return Ok(posts.clone());
        }

        let fetched = Arc::new(api.fetch_index().await?);

        // another navigation may have filled it while we were fetching, keep the first
        let mut slot = self.posts.write().await;
        Ok(slot.get_or_insert(fetched).clone())
    }

    /// Always fetches and replaces whatever is cached.
    pub async fn refresh<A>(&self, api: &A) -> Result<Arc<Vec<PostSummary>>>
    where
        A: PostsApi + ?Sized,
    {
        let fetched = Arc::new(api.fetch_index().await?);
        *self.posts.write().await = Some(fetched.clone());
        tracing::debug!("Post cache refreshed with {} posts", fetched.len());
        Ok(fetched)
    }

    /// Drops the cached index; the next `get_or_load` fetches again.
    pub async fn invalidate(&self) {
        *self.posts.write().await = None;
    }

    pub async fn snapshot(&self) -> Option<Arc<Vec<PostSummary>>> {
        self.posts.read().await.clone()
    }
}
