use crate::error::Result;
use crate::io::{ContentReader, slug_from_filename};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reads posts straight from the local filesystem, every call hits the disk.
pub struct LocalContentReader;

#[async_trait]
impl ContentReader for LocalContentReader {
    async fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_markdown_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = root.to_path_buf();

        // walkdir is blocking, keep it off the runtime threads
        let entries = tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
            let mut entries = Vec::new();
            for entry in WalkDir::new(&root)
                .min_depth(1)
                .max_depth(1)
                .follow_links(true)
                .sort_by_file_name()
            {
                let entry = entry.map_err(std::io::Error::from)?;

                if !entry.file_type().is_file() {
                    continue;
                }

                let is_markdown = entry
                    .file_name()
                    .to_str()
                    .and_then(slug_from_filename)
                    .is_some();

                if is_markdown {
                    entries.push(entry.into_path());
                } else {
                    tracing::trace!("Skipping non-markdown entry {}", entry.path().display());
                }
            }
            Ok(entries)
        })
        .await
        .map_err(std::io::Error::other)??;

        Ok(entries)
    }
}
