// Error types for the content store and the client renderer.
// Handlers turn these into HTTP responses, the client surfaces them to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Failed to parse frontmatter in {file}: {message}")]
    FrontMatter { file: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status {0}")]
    Status(u16),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlogError>;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let status = match self {
            BlogError::PostNotFound => StatusCode::NOT_FOUND,
            _ => {
                tracing::error!("Request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: match status {
                StatusCode::NOT_FOUND => self.to_string(),
                _ => "Internal server error".to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}
