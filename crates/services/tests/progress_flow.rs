use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use primer_core::model::ProgressRecord;
use services::{AppConfig, AppServices, Persistence, ProgressService};
use storage::repository::{
    LocalStorage, PROGRESS_STORAGE_KEY, ProgressRepository, Storage, StorageError,
};

struct BrokenRepository;

#[async_trait]
impl ProgressRepository for BrokenRepository {
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn save_progress(&self, _record: &ProgressRecord) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test]
async fn progress_survives_reload() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress_flow?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    let first = ProgressService::load(Arc::clone(&storage.progress)).await;
    first.mark_complete("visual").await;
    let update = first.mark_complete("interactive").await;
    assert_eq!(update.persistence, Persistence::Saved);
    assert!((update.percentage - 40.0).abs() < f64::EPSILON);

    let reloaded = ProgressService::load(Arc::clone(&storage.progress)).await;
    assert!(reloaded.is_complete("visual"));
    assert!(reloaded.is_complete("interactive"));
    assert!(!reloaded.is_complete("overview"));
    assert!((reloaded.percentage() - 40.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn partial_saved_record_is_merged_over_defaults() {
    let storage = Storage::in_memory();
    storage
        .local
        .set_item(PROGRESS_STORAGE_KEY, r#"{"reference":true,"legacy":false}"#)
        .await
        .unwrap();

    let service = ProgressService::load(Arc::clone(&storage.progress)).await;
    let record = service.record();
    assert_eq!(record.total(), 6);
    assert!(record.is_complete("reference"));
    assert!(!record.is_complete("overview"));
}

#[tokio::test]
async fn corrupt_saved_progress_falls_back_to_defaults() {
    let storage = Storage::in_memory();
    storage
        .local
        .set_item(PROGRESS_STORAGE_KEY, "[1, 2, 3]")
        .await
        .unwrap();

    let service = ProgressService::load(Arc::clone(&storage.progress)).await;
    assert_eq!(service.record(), ProgressRecord::default());
}

#[tokio::test]
async fn failed_writes_keep_progress_in_memory() {
    let service = ProgressService::load(Arc::new(BrokenRepository)).await;
    assert_eq!(service.record(), ProgressRecord::default());

    let update = service.mark_complete("exercises").await;
    assert_eq!(update.persistence, Persistence::MemoryOnly);
    assert!((update.percentage - 20.0).abs() < f64::EPSILON);
    assert!(service.is_complete("exercises"));
}

#[tokio::test(start_paused = true)]
async fn app_services_wire_configured_run_delay() {
    let config = AppConfig::default().with_run_delay(Duration::from_millis(10));
    let services = AppServices::from_storage(&Storage::in_memory(), &config).await;
    assert_eq!(services.code_runner().delay(), Duration::from_millis(10));
    assert_eq!(services.content().lessons().len(), 10);

    let out = services
        .code_runner()
        .run("fn main() {\n    println!(\"ready\");\n}")
        .await;
    assert_eq!(out.as_deref(), Some("ready\n"));
}
