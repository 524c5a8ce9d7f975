//! Post store - the operations the HTTP layer is allowed to perform.

use std::sync::Arc;

use crate::domain::{PageRequest, Post, PostDraft, PostPage, timestamp_now};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// CRUD over posts, backed by an injected repository.
///
/// Each operation validates its input first and then issues exactly one
/// repository call.
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list_all().await?)
    }

    pub async fn list_page(&self, page: PageRequest) -> Result<PostPage, DomainError> {
        Ok(self.repo.list_page(page).await?)
    }

    /// Returns `DomainError::NotFound` when no post has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    pub async fn create(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Post, DomainError> {
        let draft = PostDraft::new(title, content)?;
        let post = self.repo.insert(draft, timestamp_now()).await?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    pub async fn update(
        &self,
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Post, DomainError> {
        let draft = PostDraft::new(title, content)?;
        let post = self
            .repo
            .update(id, draft, timestamp_now())
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;
        tracing::info!(post_id = post.id, "Post updated");
        Ok(post)
    }

    /// Returns whether a post was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            tracing::info!(post_id = id, "Post deleted");
        }
        Ok(removed)
    }
}
