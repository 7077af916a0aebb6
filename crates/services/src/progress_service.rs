use std::sync::{Arc, PoisonError, RwLock};

use primer_core::model::ProgressRecord;
use storage::repository::ProgressRepository;
use tokio::sync::Mutex;

/// Where the latest progress change ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Saved,
    /// The write failed; the change only lives in this process.
    MemoryOnly,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    pub percentage: f64,
    pub persistence: Persistence,
}

/// Tracks which sections the learner finished and mirrors the record to the
/// progress repository after every change.
///
/// Storage problems never reach the caller. The in-memory record stays
/// authoritative and failures are logged.
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
    record: RwLock<ProgressRecord>,
    save_lock: Mutex<()>,
}

impl ProgressService {
    /// Read the persisted record and merge it over the defaults.
    ///
    /// Nothing is written back until the first change.
    pub async fn load(repo: Arc<dyn ProgressRepository>) -> Self {
        let record = match repo.load_progress().await {
            Ok(Some(persisted)) => ProgressRecord::merge_persisted(persisted),
            Ok(None) => ProgressRecord::default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read saved progress, starting fresh");
                ProgressRecord::default()
            }
        };
        tracing::debug!(
            completed = record.completed_count(),
            total = record.total(),
            "progress loaded"
        );
        Self {
            repo,
            record: RwLock::new(record),
            save_lock: Mutex::new(()),
        }
    }

    /// Mark `section_id` complete and persist the whole record.
    ///
    /// Any key is accepted, including ones outside the five sections.
    pub async fn mark_complete(&self, section_id: &str) -> ProgressUpdate {
        // Serialize writers so an older snapshot never lands after a newer one.
        let _saving = self.save_lock.lock().await;
        let snapshot = {
            let mut record = self.record.write().unwrap_or_else(PoisonError::into_inner);
            record.mark_complete(section_id);
            record.clone()
        };

        let persistence = match self.repo.save_progress(&snapshot).await {
            Ok(()) => Persistence::Saved,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    section = section_id,
                    "could not save progress, keeping it in memory"
                );
                Persistence::MemoryOnly
            }
        };

        ProgressUpdate {
            percentage: snapshot.percentage(),
            persistence,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.read().percentage()
    }

    #[must_use]
    pub fn is_complete(&self, section_id: &str) -> bool {
        self.read().is_complete(section_id)
    }

    /// Snapshot of the current record.
    #[must_use]
    pub fn record(&self) -> ProgressRecord {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, ProgressRecord> {
        self.record.read().unwrap_or_else(PoisonError::into_inner)
    }
}
