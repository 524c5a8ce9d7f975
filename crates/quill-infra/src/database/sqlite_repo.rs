//! SQLite repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DbConn, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use quill_core::RepoError;
use quill_core::domain::{PageRequest, Post, PostDraft, PostPage};
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity, format_timestamp};

/// Post repository over a SeaORM SQLite connection pool.
pub struct SqlitePostRepository {
    db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("constraint") || err_str.contains("UNIQUE") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

fn into_posts(models: Vec<post::Model>) -> Result<Vec<Post>, RepoError> {
    models.into_iter().map(Post::try_from).collect()
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        into_posts(models)
    }

    async fn list_page(&self, page: PageRequest) -> Result<PostPage, RepoError> {
        let total = PostEntity::find().count(&self.db).await.map_err(map_db_err)?;

        let models = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(page = page.page(), limit = page.limit(), total, "Listed posts page");

        Ok(PostPage {
            posts: into_posts(models)?,
            page: page.page(),
            limit: page.limit(),
            total,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        result.map(Post::try_from).transpose()
    }

    async fn insert(&self, draft: PostDraft, now: DateTime<Utc>) -> Result<Post, RepoError> {
        let (title, content) = draft.into_parts();
        let stamp = format_timestamp(now);

        let active_model = post::ActiveModel {
            id: NotSet,
            title: Set(title),
            content: Set(content),
            created_at: Set(stamp.clone()),
            updated_at: Set(stamp),
        };

        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        Post::try_from(model)
    }

    async fn update(
        &self,
        id: i64,
        draft: PostDraft,
        now: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError> {
        let (title, content) = draft.into_parts();

        // One statement, so concurrent writers only ever wait on the write
        // lock. Fixed-width ISO text orders the same as the instants it encodes.
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(title))
            .col_expr(post::Column::Content, Expr::value(content))
            .col_expr(
                post::Column::UpdatedAt,
                Expr::cust_with_values(r#"MAX("updatedAt", ?)"#, [format_timestamp(now)]),
            )
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}
