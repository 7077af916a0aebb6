use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Startup failures. Runtime storage problems never surface here; progress
/// degrades to memory-only instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("could not open progress database: {0}")]
    Sqlite(#[from] SqliteInitError),
}
