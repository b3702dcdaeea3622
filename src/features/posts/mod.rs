use crate::AppState;
use crate::domain::PostSummary;
use crate::error::BlogError;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, header::CONTENT_TYPE},
    routing::get,
};

// mounted under /api/posts
pub fn posts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts_handler))
        .route("/{slug}", get(get_post_handler))
}

async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostSummary>>, BlogError> {
    let posts = state.posts.list_posts().await?;
    Ok(Json(posts))
}

async fn get_post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<([(HeaderName, &'static str); 1], String), BlogError> {
    let body = state.posts.get_post_body(&slug).await?;
    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], body))
}
