use async_trait::async_trait;
use primer_core::model::ProgressRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Key under which the learner's progress map is stored.
pub const PROGRESS_STORAGE_KEY: &str = "rustLearningProgress";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String key-value store with the semantics of a browser's local storage.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Repository contract for the learner's progress record.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load the persisted record, or `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` when the stored value is not a
    /// valid progress map, or other storage errors.
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError>;

    /// Persist the whole record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Stores the progress record as JSON text under [`PROGRESS_STORAGE_KEY`].
#[derive(Clone)]
pub struct LocalStorageProgressRepository {
    local: Arc<dyn LocalStorage>,
}

impl LocalStorageProgressRepository {
    #[must_use]
    pub fn new(local: Arc<dyn LocalStorage>) -> Self {
        Self { local }
    }
}

#[async_trait]
impl ProgressRepository for LocalStorageProgressRepository {
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let Some(raw) = self.local.get_item(PROGRESS_STORAGE_KEY).await? else {
            return Ok(None);
        };
        ProgressRecord::from_json(&raw)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let raw = record
            .to_json()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.local.set_item(PROGRESS_STORAGE_KEY, &raw).await
    }
}

/// Simple in-memory key-value store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl LocalStorage for InMemoryRepository {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the key-value store and the progress repository behind trait
/// objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub local: Arc<dyn LocalStorage>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_local(Arc::new(InMemoryRepository::new()))
    }

    /// Wire a progress repository on top of an existing key-value store.
    #[must_use]
    pub fn from_local(local: Arc<dyn LocalStorage>) -> Self {
        let progress: Arc<dyn ProgressRepository> =
            Arc::new(LocalStorageProgressRepository::new(Arc::clone(&local)));
        Self { local, progress }
    }
}
