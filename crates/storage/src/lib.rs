pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, LocalStorage, LocalStorageProgressRepository, PROGRESS_STORAGE_KEY,
    ProgressRepository, Storage, StorageError,
};
