use crate::client::api::PostsApi;
use crate::client::cache::PostCache;
use crate::client::markup::Node;
use crate::client::router::Route;
use crate::client::views::{self, ViewSettings};
use crate::error::{BlogError, Result};
use crate::parser::markdown::markdown_to_html;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// What became of a route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The view was rendered into the container
    Rendered(Route),
    /// A newer route change started while this one was loading, its view was dropped
    Superseded(Route),
}

/// The single mount point every view is rendered into.
#[derive(Default)]
pub struct Container {
    current: Mutex<Option<Node>>,
}

impl Container {
    pub fn node(&self) -> Option<Node> {
        self.lock().clone()
    }

    /// Rendered HTML of the current view, empty before the first navigation.
    pub fn html(&self) -> String {
        self.lock().as_ref().map(Node::to_html).unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Node>> {
        // a panic mid-replace leaves a whole node behind, the data is still usable
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub struct Renderer<A> {
    api: A,
    cache: PostCache,
    settings: ViewSettings,
    // ticket of the most recent route change
    latest: AtomicU64,
    container: Container,
}

impl<A: PostsApi> Renderer<A> {
    pub fn new(api: A, settings: ViewSettings) -> Self {
        Self {
            api,
            cache: PostCache::new(),
            settings,
            latest: AtomicU64::new(0),
            container: Container::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn cache(&self) -> &PostCache {
        &self.cache
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Handles a fragment change: route it, build the view, mount it.
    ///
    /// Only the most recent route change may mount its view. If another one
    /// starts while this one is still fetching, this result is discarded and
    /// `Navigation::Superseded` is returned. On error the container is left
    /// untouched.
    pub async fn handle_route_change(&self, fragment: &str) -> Result<Navigation> {
        let route = Route::from_fragment(fragment);
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Navigating to {} (ticket {})", route, ticket);

        let view = match self.render(&route).await {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!("Failed to render {}: {}", route, e);
                return Err(e);
            }
        };

        let mut current = self.container.lock();
        if self.latest.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Dropping stale view for {} (ticket {})", route, ticket);
            return Ok(Navigation::Superseded(route));
        }
        *current = Some(view);

        Ok(Navigation::Rendered(route))
    }

    /// Builds the view for a route without mounting it.
    pub async fn render(&self, route: &Route) -> Result<Node> {
        match route {
            Route::Home => {
                let posts = self.cache.get_or_load(&self.api).await?;
                Ok(views::home(&posts, &self.settings))
            }
            Route::Archive { page } => {
                let posts = self.cache.get_or_load(&self.api).await?;
                Ok(views::archive(&posts, *page, &self.settings))
            }
            Route::Post { slug } => self.render_post(slug).await,
            Route::Contact => Ok(views::contact(&self.settings)),
        }
    }

    async fn render_post(&self, slug: &str) -> Result<Node> {
        let posts = self.cache.get_or_load(&self.api).await?;

        // unknown slugs never reach the network
        let Some(post) = posts.iter().find(|p| p.slug == slug) else {
            return Ok(views::not_found());
        };
        tracing::debug!("Loading body for post {}", post);

        match self.api.fetch_body(slug).await {
            Ok(markdown) => Ok(views::post_detail(post, markdown_to_html(&markdown))),
            // listed but deleted since the index was loaded
            Err(BlogError::PostNotFound) => Ok(views::not_found()),
            Err(e) => Err(e),
        }
    }

    /// Refetches the index on the next view that needs it.
    pub async fn invalidate_posts(&self) {
        self.cache.invalidate().await;
    }
}
