pub mod post;

pub use post::{Post, PostSummary, ReadTime, sort_newest_first};
