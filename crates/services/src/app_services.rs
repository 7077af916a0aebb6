use std::sync::Arc;

use primer_core::ContentRegistry;
use storage::repository::Storage;

use crate::code_runner::CodeRunner;
use crate::config::AppConfig;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    content: &'static ContentRegistry,
    progress: Arc<ProgressService>,
    code_runner: Arc<CodeRunner>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(config: &AppConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(&config.database_url).await?;
        Ok(Self::from_storage(&storage, config).await)
    }

    /// Build services over an existing storage aggregate.
    pub async fn from_storage(storage: &Storage, config: &AppConfig) -> Self {
        let content = ContentRegistry::builtin();
        if let Err(err) = content.validate() {
            tracing::warn!(error = %err, "builtin content failed validation");
        }
        let progress = Arc::new(ProgressService::load(Arc::clone(&storage.progress)).await);
        let code_runner = Arc::new(CodeRunner::new(config.run_delay));
        Self {
            content,
            progress,
            code_runner,
        }
    }

    #[must_use]
    pub fn content(&self) -> &'static ContentRegistry {
        self.content
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn code_runner(&self) -> Arc<CodeRunner> {
        Arc::clone(&self.code_runner)
    }
}
