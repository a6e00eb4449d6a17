//! Migration command tests against an in-memory SQLite database.

use user_registry::config::Config;
use user_registry::infra::Database;

const CREATE_USERS: &str = "m20240101_000001_create_users_table";

async fn unmigrated_database() -> Database {
    let config = Config::with_database_url("sqlite::memory:");
    Database::connect_without_migrations(&config)
        .await
        .expect("in-memory database should connect")
}

#[tokio::test]
async fn test_status_on_fresh_database_lists_pending() {
    let db = unmigrated_database().await;

    let status = db.migration_status().await.unwrap();

    assert_eq!(status, vec![(CREATE_USERS.to_string(), false)]);
}

#[tokio::test]
async fn test_status_after_up_lists_applied() {
    let db = unmigrated_database().await;

    db.run_migrations().await.unwrap();
    let status = db.migration_status().await.unwrap();

    assert_eq!(status, vec![(CREATE_USERS.to_string(), true)]);
}

#[tokio::test]
async fn test_rollback_returns_to_pending() {
    let db = unmigrated_database().await;
    db.run_migrations().await.unwrap();

    db.rollback_migration().await.unwrap();
    let status = db.migration_status().await.unwrap();

    assert_eq!(status, vec![(CREATE_USERS.to_string(), false)]);
}
