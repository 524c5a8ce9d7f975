//! # Quill Shared
//!
//! Wire types exchanged between the API server and its clients.

pub mod dto;
pub mod response;

pub use dto::{ListPostsQuery, PostPageResponse, PostPayload, PostResponse};
pub use response::ErrorResponse;
