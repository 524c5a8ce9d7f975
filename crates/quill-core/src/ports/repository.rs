use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{PageRequest, Post, PostDraft, PostPage};
use crate::error::RepoError;

/// Post repository - durable storage for the posts table.
///
/// Implementations assign ids; they never validate, since a `PostDraft`
/// is already known to be well-formed.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in ascending id order.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// One page of posts in ascending id order, with the table's total count.
    async fn list_page(&self, page: PageRequest) -> Result<PostPage, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Persist a new post whose `created_at` and `updated_at` are both `now`.
    async fn insert(&self, draft: PostDraft, now: DateTime<Utc>) -> Result<Post, RepoError>;

    /// Overwrite title and content of an existing post. `updated_at` becomes
    /// the later of `now` and its previous value, as in `Post::revise`.
    /// Returns `None` when no row has this id.
    async fn update(
        &self,
        id: i64,
        draft: PostDraft,
        now: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError>;

    /// Remove a post. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
