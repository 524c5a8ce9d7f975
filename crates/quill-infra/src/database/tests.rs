use std::sync::Arc;

use chrono::Duration;
use migration::{Migrator, MigratorTrait};
use sea_orm::DbConn;

use quill_core::domain::{PageRequest, PostDraft, timestamp_now};
use quill_core::ports::PostRepository;

use crate::database::{DatabaseConfig, SqlitePostRepository, connect};

async fn setup_db() -> DbConn {
    let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn draft(title: &str, content: &str) -> PostDraft {
    PostDraft::new(title, content).unwrap()
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let repo = SqlitePostRepository::new(setup_db().await);
    let now = timestamp_now();

    let first = repo.insert(draft("First", "one"), now).await.unwrap();
    let second = repo.insert(draft("Second", "two"), now).await.unwrap();

    assert_eq!(first.id, 1);
    assert!(second.id > first.id);
    assert_eq!(first.created_at, now);
    assert_eq!(first.updated_at, now);
}

#[tokio::test]
async fn test_find_by_id_reads_back_inserted_post() {
    let repo = SqlitePostRepository::new(setup_db().await);
    let created = repo
        .insert(draft("Test Post", "Content"), timestamp_now())
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
    assert_eq!(repo.find_by_id(999).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_refreshes_updated_at_only() {
    let repo = SqlitePostRepository::new(setup_db().await);
    let created_at = timestamp_now();
    let created = repo.insert(draft("A", "B"), created_at).await.unwrap();

    let later = created_at + Duration::seconds(5);
    let updated = repo
        .update(created.id, draft("A2", "B2"), later)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "A2");
    assert_eq!(updated.content, "B2");
    assert_eq!(updated.created_at, created_at);
    assert_eq!(updated.updated_at, later);
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_update_keeps_updated_at_when_clock_goes_back() {
    let repo = SqlitePostRepository::new(setup_db().await);
    let created_at = timestamp_now();
    let created = repo.insert(draft("A", "B"), created_at).await.unwrap();

    let earlier = created_at - Duration::seconds(30);
    let updated = repo
        .update(created.id, draft("A2", "B2"), earlier)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "A2");
    assert_eq!(updated.updated_at, created_at);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_on_file_database_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("posts.db").display()),
        max_connections: 5,
        min_connections: 1,
    };
    let db = connect(&config).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repo = Arc::new(SqlitePostRepository::new(db));
    let created = repo.insert(draft("A", "B"), timestamp_now()).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..40 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.update(created.id, draft(&format!("T{i}"), "body"), timestamp_now())
                .await
        }));
    }

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(matches!(result, Ok(Some(_))), "{result:?}");
    }

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(stored.title.starts_with('T'));
    assert_eq!(stored.created_at, created.created_at);
    assert!(stored.updated_at >= created.created_at);
}

#[tokio::test]
async fn test_update_missing_row_is_none() {
    let repo = SqlitePostRepository::new(setup_db().await);
    let result = repo.update(5, draft("A", "B"), timestamp_now()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_reports_rows_removed() {
    let repo = SqlitePostRepository::new(setup_db().await);
    let post = repo.insert(draft("A", "B"), timestamp_now()).await.unwrap();

    assert!(repo.delete(post.id).await.unwrap());
    assert!(!repo.delete(post.id).await.unwrap());
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let repo = SqlitePostRepository::new(setup_db().await);
    let now = timestamp_now();
    let first = repo.insert(draft("A", "B"), now).await.unwrap();
    repo.delete(first.id).await.unwrap();

    let second = repo.insert(draft("C", "D"), now).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_list_page_windows_in_id_order() {
    let repo = SqlitePostRepository::new(setup_db().await);
    let now = timestamp_now();
    for i in 1..=5 {
        repo.insert(draft(&format!("Post {i}"), "body"), now)
            .await
            .unwrap();
    }

    let page = repo.list_page(PageRequest::new(2, 2)).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages(), 3);
    let titles: Vec<_> = page.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Post 3", "Post 4"]);

    let past_end = repo.list_page(PageRequest::new(9, 2)).await.unwrap();
    assert!(past_end.posts.is_empty());
    assert_eq!(past_end.total, 5);

    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}
