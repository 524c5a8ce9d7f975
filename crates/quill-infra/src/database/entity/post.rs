//! Post entity for SeaORM.

use chrono::{DateTime, SecondsFormat, Utc};
use sea_orm::entity::prelude::*;

use quill_core::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_name = "createdAt", column_type = "Text")]
    pub created_at: String,
    #[sea_orm(column_name = "updatedAt", column_type = "Text")]
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Timestamps are stored as ISO-8601 text, e.g. `2025-05-22T18:23:45.123Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| RepoError::Query(format!("invalid timestamp {raw:?}: {e}")))
}

/// Conversion from SeaORM Model to Domain Post.
impl TryFrom<Model> for quill_core::domain::Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            created_at: parse_timestamp(&model.created_at)?,
            updated_at: parse_timestamp(&model.updated_at)?,
            title: model.title,
            content: model.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_text_round_trips() {
        let at = Utc.with_ymd_and_hms(2025, 5, 22, 18, 23, 45).unwrap()
            + chrono::Duration::milliseconds(123);
        let text = format_timestamp(at);
        assert_eq!(text, "2025-05-22T18:23:45.123Z");
        assert_eq!(parse_timestamp(&text).unwrap(), at);
    }

    #[test]
    fn test_garbage_timestamp_is_query_error() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(RepoError::Query(_))
        ));
    }
}
