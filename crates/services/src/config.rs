use std::time::Duration;

use crate::code_runner::DEFAULT_RUN_DELAY;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://primer.sqlite3";

/// Runtime settings resolved by the binary from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub run_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            run_delay: DEFAULT_RUN_DELAY,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    #[must_use]
    pub fn with_run_delay(mut self, delay: Duration) -> Self {
        self.run_delay = delay;
        self
    }
}
