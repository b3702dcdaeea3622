use crate::domain::{Post, PostSummary, sort_newest_first};
use crate::error::{BlogError, Result};
use crate::io::{ContentReader, resolve_post_path, slug_from_filename};
use crate::parser::markdown::extract_frontmatter;
use std::path::{Path, PathBuf};

/// Serves posts out of a directory of markdown files.
///
/// Nothing is cached: the index and every post body are read and parsed from
/// disk on each call, so edits show up on the next request.
pub struct PostService {
    reader: Box<dyn ContentReader>,
    posts_dir: PathBuf,
}

impl PostService {
    pub fn new(reader: Box<dyn ContentReader>, posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            posts_dir: posts_dir.into(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Builds the post index, newest first.
    ///
    /// Any unreadable file or broken frontmatter fails the whole listing.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>> {
        let files = self.reader.list_markdown_files(&self.posts_dir).await?;

        let mut summaries = Vec::with_capacity(files.len());
        for path in files {
            let Some(filename) = path.file_name().and_then(|f| f.to_str()) else {
                tracing::warn!("Skipping post with a non UTF-8 file name: {}", path.display());
                continue;
            };
            let Some(slug) = slug_from_filename(filename) else {
                continue;
            };

            // the file can vanish between listing and reading
            let raw = self
                .reader
                .read_to_string(&path)
                .await?
                .ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("{} disappeared while listing posts", path.display()),
                    )
                })?;

            let post = parse_post(slug, filename, &raw)?;
            summaries.push(post.summary);
        }

        sort_newest_first(&mut summaries);

        tracing::debug!("Listed {} posts from {}", summaries.len(), self.posts_dir.display());
        Ok(summaries)
    }

    /// Loads one post by slug, `BlogError::PostNotFound` if there is no such file.
    pub async fn get_post(&self, slug: &str) -> Result<Post> {
        let path = resolve_post_path(&self.posts_dir, slug)?;

        let raw = match self.reader.read_to_string(&path).await? {
            Some(raw) => raw,
            None => {
                tracing::debug!("No post file for slug {}", slug);
                return Err(BlogError::PostNotFound);
            }
        };

        let filename = format!("{}.md", slug);
        parse_post(slug, &filename, &raw)
    }

    /// The markdown body of a post, frontmatter stripped.
    pub async fn get_post_body(&self, slug: &str) -> Result<String> {
        Ok(self.get_post(slug).await?.content)
    }
}

fn parse_post(slug: &str, filename: &str, raw: &str) -> Result<Post> {
    let (frontmatter, content) = extract_frontmatter(raw, filename)?;

    Ok(Post {
        summary: PostSummary {
            slug: slug.to_string(),
            title: frontmatter.title,
            date: frontmatter.date,
            excerpt: frontmatter.excerpt,
            read_time: frontmatter.read_time,
            tags: frontmatter.tags,
        },
        content,
    })
}
