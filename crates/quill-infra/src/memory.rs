//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use quill_core::RepoError;
use quill_core::domain::{PageRequest, Post, PostDraft, PostPage};
use quill_core::ports::PostRepository;

#[derive(Default)]
struct MemoryState {
    rows: BTreeMap<i64, Post>,
    last_id: i64,
}

/// In-memory repository using a BTreeMap with async RwLock.
///
/// Ids are never reused, matching SQLite's AUTOINCREMENT.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn list_page(&self, page: PageRequest) -> Result<PostPage, RepoError> {
        let state = self.state.read().await;
        let posts = state
            .rows
            .values()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(PostPage {
            posts,
            page: page.page(),
            limit: page.limit(),
            total: state.rows.len() as u64,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: PostDraft, now: DateTime<Utc>) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let post = Post::new(state.last_id, draft, now);
        state.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: i64,
        draft: PostDraft,
        now: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError> {
        let mut state = self.state.write().await;
        let Some(existing) = state.rows.remove(&id) else {
            return Ok(None);
        };

        let revised = existing.revise(draft, now);
        state.rows.insert(id, revised.clone());
        Ok(Some(revised))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        Ok(state.rows.remove(&id).is_some())
    }
}
