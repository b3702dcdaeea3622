pub mod posts;

pub use self::posts::PostService;
