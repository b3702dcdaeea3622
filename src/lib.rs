//! Bloggy: a small markdown blog.
//!
//! The server side reads markdown posts with YAML frontmatter from a directory
//! and serves them as a JSON index plus plain-text bodies. The [`client`] side
//! fetches that API, routes on URL fragments and renders each page as markup.

use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod io;
pub mod parser;
pub mod services;

#[cfg(test)]
mod tests;

use crate::config::BloggyConfig;
use crate::io::LocalContentReader;
use crate::services::PostService;

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub config: Arc<BloggyConfig>,
}

impl AppState {
    pub fn from_config(config: BloggyConfig) -> Self {
        let posts = PostService::new(Box::new(LocalContentReader), config.posts_dir.clone());
        Self {
            posts: Arc::new(posts),
            config: Arc::new(config),
        }
    }
}

/// The full HTTP app: the posts API under `/api`, static files for everything else.
pub fn build_app(state: AppState, public_dir: &Path) -> Router {
    // api router, where features are composed
    let api_router = Router::new().nest("/posts", features::posts::posts_router());

    Router::new()
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
