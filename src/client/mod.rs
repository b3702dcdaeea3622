//! The browser-side half of the blog, expressed as a library.
//!
//! A [`Renderer`] owns one [`Container`]: each route change resolves the URL
//! fragment to a [`Route`], builds that route's view from the posts API and
//! mounts it, replacing whatever was there.

pub mod api;
pub mod cache;
pub mod markup;
pub mod pagination;
pub mod renderer;
pub mod router;
pub mod views;

pub use api::{HttpPostsApi, PostsApi};
pub use cache::PostCache;
pub use markup::Node;
pub use renderer::{Container, Navigation, Renderer};
pub use router::Route;
pub use views::ViewSettings;
