use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use primer_core::runner::{self, HELLO_WORLD_PROGRAM, OUTPUT_PROMPT};

pub const DEFAULT_RUN_DELAY: Duration = Duration::from_millis(1000);

/// A run that has been started but not yet finished.
///
/// The code is captured when the run starts; later edits do not affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    generation: u64,
    code: String,
}

impl RunTicket {
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Editor contents after a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorReset {
    pub code: &'static str,
    pub output: &'static str,
}

/// Simulated compile-and-run with a fixed latency.
///
/// Every start or reset bumps a generation counter. A run whose generation
/// is no longer current finishes with `None` so it cannot overwrite newer
/// output.
#[derive(Debug)]
pub struct CodeRunner {
    delay: Duration,
    generation: AtomicU64,
}

impl Default for CodeRunner {
    fn default() -> Self {
        Self::new(DEFAULT_RUN_DELAY)
    }
}

impl CodeRunner {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn start(&self, code: impl Into<String>) -> RunTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(generation, "run started");
        RunTicket {
            generation,
            code: code.into(),
        }
    }

    /// Wait out the latency and produce the output, or `None` if superseded.
    pub async fn finish(&self, ticket: RunTicket) -> Option<String> {
        tokio::time::sleep(self.delay).await;
        if self.generation.load(Ordering::SeqCst) != ticket.generation {
            tracing::debug!(generation = ticket.generation, "run superseded");
            return None;
        }
        Some(runner::simulate(ticket.code()).render())
    }

    /// Start and finish in one call.
    pub async fn run(&self, code: impl Into<String>) -> Option<String> {
        let ticket = self.start(code);
        self.finish(ticket).await
    }

    /// Drop any pending run.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Cancel pending runs and return the canonical program and prompt.
    pub fn reset(&self) -> EditorReset {
        self.cancel();
        EditorReset {
            code: HELLO_WORLD_PROGRAM,
            output: OUTPUT_PROMPT,
        }
    }
}
