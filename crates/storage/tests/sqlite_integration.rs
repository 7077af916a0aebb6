use primer_core::model::ProgressRecord;
use storage::repository::{LocalStorage, PROGRESS_STORAGE_KEY, ProgressRepository, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_local_storage_upserts_and_removes() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_local?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.get_item("theme").await.unwrap().is_none());
    repo.set_item("theme", "dark").await.unwrap();
    repo.set_item("theme", "light").await.unwrap();
    assert_eq!(repo.get_item("theme").await.unwrap().as_deref(), Some("light"));

    repo.remove_item("theme").await.unwrap();
    assert!(repo.get_item("theme").await.unwrap().is_none());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(applied, 1);
}

#[tokio::test]
async fn progress_survives_a_new_storage_handle() {
    let url = "sqlite:file:memdb_progress?mode=memory&cache=shared";
    let first = Storage::sqlite(url).await.expect("storage");

    let mut record = ProgressRecord::default();
    record.mark_complete("overview");
    record.mark_complete("exercises");
    first.progress.save_progress(&record).await.unwrap();

    let second = Storage::sqlite(url).await.expect("reopen");
    let loaded = second.progress.load_progress().await.unwrap().expect("saved");
    assert!(loaded.is_complete("overview"));
    assert!(loaded.is_complete("exercises"));
    assert!(!loaded.is_complete("visual"));

    let raw = second
        .local
        .get_item(PROGRESS_STORAGE_KEY)
        .await
        .unwrap()
        .unwrap();
    assert!(raw.starts_with('{'));
}
