use chrono::{DateTime, SubsecRound, Utc};

use crate::error::DomainError;

/// Post entity - represents a blog post or article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a post from a draft. Both timestamps are `now`.
    pub fn new(id: i64, draft: PostDraft, now: DateTime<Utc>) -> Self {
        let (title, content) = draft.into_parts();
        Self {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content. `updated_at` never moves backwards, even if
    /// the clock does.
    pub fn revise(mut self, draft: PostDraft, now: DateTime<Utc>) -> Self {
        let (title, content) = draft.into_parts();
        self.title = title;
        self.content = content;
        self.updated_at = now.max(self.updated_at);
        self
    }
}

/// Current time at the precision the store persists (milliseconds).
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// A validated title/content pair, ready to be written.
///
/// Both fields must contain at least one non-whitespace character. The stored
/// text is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let content = content.into();

        if title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if content.trim().is_empty() {
            return Err(DomainError::Validation("content is required".to_string()));
        }

        Ok(Self { title, content })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// A 1-based page window over the posts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Page numbers below 1 become 1; limits are clamped to `1..=MAX_PAGE_SIZE`.
    /// The page number is capped so the row offset fits a signed 64-bit
    /// SQL parameter.
    pub fn new(page: i64, limit: i64) -> Self {
        let limit = limit.clamp(1, MAX_PAGE_SIZE as i64) as u64;
        let last_page = i64::MAX as u64 / limit + 1;
        let page = (page.max(1) as u64).min(last_page);

        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of rows preceding this page. Never exceeds `i64::MAX`.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

/// One page of posts plus the size of the whole table.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl PostPage {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit.max(1))
    }
}
