use crate::client::{Navigation, PostsApi, Renderer, Route, ViewSettings};
use crate::domain::PostSummary;
use crate::error::{BlogError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// --- Manual Mock: PostsApi ---
// stands in for the HTTP API and records every call the renderer makes
#[derive(Clone, Default)]
pub struct MockPostsApi {
    pub posts: Arc<Mutex<Vec<PostSummary>>>,
    pub bodies: Arc<Mutex<HashMap<String, String>>>,
    pub index_calls: Arc<AtomicUsize>,
    pub body_calls: Arc<Mutex<Vec<String>>>,
    pub fail_index: Arc<AtomicBool>,
    // body fetches for this slug signal `started` and then wait for `release`
    pub gate: Arc<Mutex<Option<BodyGate>>>,
}

#[derive(Clone)]
pub struct BodyGate {
    pub slug: String,
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl MockPostsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_post(&self, slug: &str, title: &str, date: &str, body: &str) {
        self.posts.lock().unwrap().push(PostSummary {
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            ..PostSummary::new(slug)
        });
        self.bodies
            .lock()
            .unwrap()
            .insert(slug.to_string(), body.to_string());
    }

    pub fn hold_body(&self, slug: &str) -> BodyGate {
        let gate = BodyGate {
            slug: slug.to_string(),
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        };
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn index_calls(&self) -> usize {
        self.index_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostsApi for MockPostsApi {
    async fn fetch_index(&self) -> Result<Vec<PostSummary>> {
        self.index_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_index.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("network is down").into());
        }
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn fetch_body(&self, slug: &str) -> Result<String> {
        self.body_calls.lock().unwrap().push(slug.to_string());

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            if gate.slug == slug {
                gate.started.notify_one();
                gate.release.notified().await;
            }
        }

        self.bodies
            .lock()
            .unwrap()
            .get(slug)
            .cloned()
            .ok_or(BlogError::PostNotFound)
    }
}

fn seeded_api() -> MockPostsApi {
    let api = MockPostsApi::new();
    for i in 1..=10 {
        api.add_post(
            &format!("post-{}", i),
            &format!("Post {}", i),
            &format!("2024-03-{:02}", 20 - i),
            &format!("# Post {}\n\nThis is **post** number {}.", i, i),
        );
    }
    api
}

fn renderer(api: MockPostsApi) -> Renderer<MockPostsApi> {
    Renderer::new(api, ViewSettings::default())
}

// the home page loads the index once and features the first three posts
#[tokio::test]
async fn test_home_renders_featured_posts() {
    let renderer = renderer(seeded_api());

    let outcome = renderer.handle_route_change("").await.unwrap();
    assert_eq!(outcome, Navigation::Rendered(Route::Home));

    let node = renderer.container().node().unwrap();
    assert_eq!(node.find_by_class("post-card").len(), 3);
    assert!(renderer.container().html().contains("Post 1"));
}

// moving between views reuses the cached index instead of refetching
#[tokio::test]
async fn test_index_is_cached_across_routes() {
    let api = seeded_api();
    let renderer = renderer(api.clone());

    renderer.handle_route_change("#home").await.unwrap();
    renderer.handle_route_change("#archive").await.unwrap();
    renderer.handle_route_change("#archive?page=2").await.unwrap();
    renderer.handle_route_change("#post/post-3").await.unwrap();

    assert_eq!(api.index_calls(), 1);
}

#[tokio::test]
async fn test_archive_second_page() {
    let renderer = renderer(seeded_api());

    let outcome = renderer.handle_route_change("#archive?page=2").await.unwrap();
    assert_eq!(outcome, Navigation::Rendered(Route::Archive { page: 2 }));

    let node = renderer.container().node().unwrap();
    let hrefs: Vec<&str> = node
        .find_by_class("post-item")
        .iter()
        .filter_map(|e| e.get_attr("href"))
        .collect();
    assert_eq!(hrefs, vec!["#post/post-5", "#post/post-6", "#post/post-7", "#post/post-8"]);
    assert!(renderer.container().html().contains("Page 2 of 3"));
}

// a known slug fetches its body and mounts the converted HTML
#[tokio::test]
async fn test_post_detail_renders_markdown() {
    let api = seeded_api();
    let renderer = renderer(api.clone());

    renderer.handle_route_change("#post/post-2").await.unwrap();

    let html = renderer.container().html();
    assert!(html.contains("<h1>Post 2</h1>"));
    assert!(html.contains("<strong>post</strong> number 2."));
    assert_eq!(*api.body_calls.lock().unwrap(), vec!["post-2".to_string()]);
}

// opening a post link directly on a fresh page still works
#[tokio::test]
async fn test_post_deep_link_loads_index_first() {
    let api = seeded_api();
    let renderer = renderer(api.clone());

    renderer.handle_route_change("#post/post-7").await.unwrap();

    assert_eq!(api.index_calls(), 1);
    assert!(renderer.container().html().contains("<h1>Post 7</h1>"));
}

// a slug missing from the index renders "not found" without asking for a body
#[tokio::test]
async fn test_unknown_slug_skips_body_request() {
    let api = seeded_api();
    let renderer = renderer(api.clone());

    let outcome = renderer.handle_route_change("#post/nope").await.unwrap();

    assert_eq!(
        outcome,
        Navigation::Rendered(Route::Post { slug: "nope".to_string() })
    );
    assert_eq!(renderer.container().html(), "<p>Post not found.</p>");
    assert!(api.body_calls.lock().unwrap().is_empty());
}

// listed in the index but gone from the server by the time we ask
#[tokio::test]
async fn test_deleted_post_renders_not_found() {
    let api = seeded_api();
    api.bodies.lock().unwrap().remove("post-4");
    let renderer = renderer(api);

    renderer.handle_route_change("#post/post-4").await.unwrap();
    assert_eq!(renderer.container().html(), "<p>Post not found.</p>");
}

// the contact page is static, no fetches at all
#[tokio::test]
async fn test_contact_needs_no_data() {
    let api = seeded_api();
    let renderer = renderer(api.clone());

    renderer.handle_route_change("#contact").await.unwrap();

    assert_eq!(api.index_calls(), 0);
    assert!(renderer.container().html().contains("Contact Me"));
}

// a failed fetch leaves the previous view in place and reports the error
#[tokio::test]
async fn test_failed_fetch_keeps_previous_view() {
    let api = seeded_api();
    let renderer = renderer(api.clone());

    renderer.handle_route_change("#contact").await.unwrap();
    let before = renderer.container().html();

    api.fail_index.store(true, Ordering::SeqCst);
    let result = renderer.handle_route_change("#archive").await;

    assert!(result.is_err());
    assert_eq!(renderer.container().html(), before);
}

// invalidate forces a refetch, refresh replaces the cache immediately
#[tokio::test]
async fn test_cache_invalidate_and_refresh() {
    let api = seeded_api();
    let renderer = renderer(api.clone());

    renderer.handle_route_change("#archive").await.unwrap();
    assert_eq!(api.index_calls(), 1);

    api.add_post("post-new", "Brand New", "2024-04-01", "new");
    renderer.invalidate_posts().await;
    assert!(renderer.cache().snapshot().await.is_none());

    renderer.handle_route_change("#archive").await.unwrap();
    assert_eq!(api.index_calls(), 2);
    assert!(renderer.container().html().contains("Page 1 of 3"));

    let refreshed = renderer.cache().refresh(renderer.api()).await.unwrap();
    assert_eq!(refreshed.len(), 11);
    assert_eq!(api.index_calls(), 3);
}

// a slow post fetch that finishes after a newer navigation must not clobber it
#[tokio::test]
async fn test_stale_navigation_is_discarded() {
    let api = seeded_api();
    let gate = api.hold_body("post-1");
    let renderer = Arc::new(renderer(api.clone()));

    // warm the cache so only the body fetch is in flight
    renderer.handle_route_change("#home").await.unwrap();

    let slow = {
        let renderer = renderer.clone();
        tokio::spawn(async move { renderer.handle_route_change("#post/post-1").await })
    };

    // wait until the slow request is actually waiting on the network
    gate.started.notified().await;

    let outcome = renderer.handle_route_change("#contact").await.unwrap();
    assert_eq!(outcome, Navigation::Rendered(Route::Contact));

    gate.release.notify_one();
    let slow_outcome = slow.await.unwrap().unwrap();

    assert_eq!(
        slow_outcome,
        Navigation::Superseded(Route::Post { slug: "post-1".to_string() })
    );
    let html = renderer.container().html();
    assert!(html.contains("Contact Me"));
    assert!(!html.contains("<h1>Post 1</h1>"));
}
