//! Domain entities - the core business objects.

mod post;

pub use post::{MAX_PAGE_SIZE, PageRequest, Post, PostDraft, PostPage, timestamp_now};
