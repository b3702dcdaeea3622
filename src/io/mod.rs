use crate::error::{BlogError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod local;

pub use local::LocalContentReader;

// where post files come from, swapped for an in-memory fake in tests
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Reads a file, `Ok(None)` when it doesn't exist.
    async fn read_to_string(&self, path: &Path) -> Result<Option<String>>;
    /// Lists the markdown files sitting directly inside `root`.
    async fn list_markdown_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub const MARKDOWN_EXTENSION: &str = ".md";

/// Slug for a markdown file name, `None` for anything that isn't one.
pub fn slug_from_filename(filename: &str) -> Option<&str> {
    filename
        .strip_suffix(MARKDOWN_EXTENSION)
        .filter(|slug| !slug.is_empty())
}

/// Resolves a slug to `<root>/<slug>.md`, refusing slugs that would point
/// anywhere but directly inside `root`.
pub fn resolve_post_path(root: &Path, slug: &str) -> Result<PathBuf> {
    let confined = !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0']);

    if !confined {
        return Err(BlogError::PostNotFound);
    }

    Ok(root.join(format!("{}{}", slug, MARKDOWN_EXTENSION)))
}
