use std::sync::Arc;

use primer_core::ContentRegistry;
use services::{CodeRunner, ProgressService};

pub trait UiApp: Send + Sync {
    fn content(&self) -> &'static ContentRegistry;
    fn progress(&self) -> Arc<ProgressService>;
    fn code_runner(&self) -> Arc<CodeRunner>;
}

#[derive(Clone)]
pub struct AppContext {
    content: &'static ContentRegistry,
    progress: Arc<ProgressService>,
    code_runner: Arc<CodeRunner>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content: app.content(),
            progress: app.progress(),
            code_runner: app.code_runner(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
