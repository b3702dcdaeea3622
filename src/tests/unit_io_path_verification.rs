use crate::error::BlogError;
use crate::io::{resolve_post_path, slug_from_filename};
use std::path::{Path, PathBuf};

#[test]
fn test_resolve_plain_slug() {
    let root = Path::new("/posts");
    let path = resolve_post_path(root, "hello-world").unwrap();
    assert_eq!(path, PathBuf::from("/posts/hello-world.md"));
}

// a slug must never lead outside the posts directory
#[test]
fn test_resolve_rejects_escapes() {
    let root = Path::new("/posts");

    for slug in ["", "..", ".", "../secret", "nested/post", "a\\b", "nul\0byte", "/etc/passwd"] {
        let result = resolve_post_path(root, slug);
        assert!(
            matches!(result, Err(BlogError::PostNotFound)),
            "slug {:?} should be rejected",
            slug
        );
    }
}

// dots inside a slug are fine, only whole `.`/`..` components are not
#[test]
fn test_resolve_allows_dotted_slug() {
    let root = Path::new("/posts");
    let path = resolve_post_path(root, "v1.2-release").unwrap();
    assert_eq!(path, PathBuf::from("/posts/v1.2-release.md"));
}

#[test]
fn test_slug_from_filename() {
    assert_eq!(slug_from_filename("hello.md"), Some("hello"));
    assert_eq!(slug_from_filename("notes.v2.md"), Some("notes.v2"));
    assert_eq!(slug_from_filename("image.png"), None);
    assert_eq!(slug_from_filename("README"), None);
    assert_eq!(slug_from_filename(".md"), None);
}
