//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, SecondsFormat, Utc};
use quill_core::domain::{Post, PostPage};
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Both fields are optional on the wire so that a missing field is reported
/// by the store's validation rather than as a JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PostPayload {
    /// Missing fields become empty strings.
    pub fn into_fields(self) -> (String, String) {
        (
            self.title.unwrap_or_default(),
            self.content.unwrap_or_default(),
        )
    }
}

/// Query string of `GET /api/posts`.
///
/// Any integer is accepted; out-of-range values are clamped later by
/// `PageRequest`. Only non-numeric text is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default, deserialize_with = "saturating_int")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "saturating_int")]
    pub limit: Option<i64>,
}

impl ListPostsQuery {
    pub fn is_paginated(&self) -> bool {
        self.page.is_some() || self.limit.is_some()
    }
}

/// A post as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// One page of posts, shaped for the paginated home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPageResponse {
    pub posts: Vec<PostResponse>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl From<PostPage> for PostPageResponse {
    fn from(page: PostPage) -> Self {
        let total_pages = page.total_pages();
        Self {
            posts: page.posts.into_iter().map(Into::into).collect(),
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages,
        }
    }
}

/// An integer, saturated to the `i64` range when it has too many digits.
fn saturating_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    struct SaturatingInt;

    impl Visitor<'_> for SaturatingInt {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            if let Ok(n) = v.parse::<i64>() {
                return Ok(n);
            }

            let (negative, digits) = match v.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, v.strip_prefix('+').unwrap_or(v)),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(E::invalid_value(de::Unexpected::Str(v), &self));
            }

            Ok(if negative { i64::MIN } else { i64::MAX })
        }
    }

    deserializer.deserialize_any(SaturatingInt).map(Some)
}

/// `2025-05-22T18:23:45.123Z`, the shape JavaScript's `toISOString` produces.
fn iso_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_post_response_uses_camel_case_and_iso_millis() {
        let at = Utc.with_ymd_and_hms(2025, 5, 22, 18, 23, 45).unwrap();
        let response = PostResponse {
            id: 1,
            title: "A".to_string(),
            content: "B".to_string(),
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["createdAt"], "2025-05-22T18:23:45.000Z");
        assert_eq!(json["updatedAt"], "2025-05-22T18:23:45.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_payload_missing_fields_become_empty() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        assert_eq!(payload.into_fields(), ("A".to_string(), String::new()));

        let payload: PostPayload = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert_eq!(payload.into_fields(), (String::new(), String::new()));
    }

    #[test]
    fn test_list_query_accepts_any_integer() {
        let query: ListPostsQuery =
            serde_json::from_str(r#"{"page":"-1","limit":"18446744073709551615"}"#).unwrap();
        assert_eq!(query.page, Some(-1));
        assert_eq!(query.limit, Some(i64::MAX));

        let query: ListPostsQuery =
            serde_json::from_str(r#"{"page":"-99999999999999999999"}"#).unwrap();
        assert_eq!(query.page, Some(i64::MIN));
        assert_eq!(query.limit, None);
        assert!(query.is_paginated());

        let query: ListPostsQuery = serde_json::from_str(r#"{"page":18446744073709551615}"#).unwrap();
        assert_eq!(query.page, Some(i64::MAX));

        let query: ListPostsQuery = serde_json::from_str("{}").unwrap();
        assert!(!query.is_paginated());
    }

    #[test]
    fn test_list_query_rejects_non_numeric_text() {
        for raw in [r#"{"page":"abc"}"#, r#"{"page":""}"#, r#"{"limit":"-"}"#, r#"{"page":"1.5"}"#] {
            assert!(serde_json::from_str::<ListPostsQuery>(raw).is_err(), "{raw}");
        }
    }
}
