use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::nav::NavSection;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("persisted progress is not a JSON object of booleans: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("progress could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Completion flags keyed by section identifier.
///
/// Always contains the five navigation section keys; keys created through
/// [`ProgressRecord::mark_complete`] or loaded from storage are kept as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord(BTreeMap<String, bool>);

impl Default for ProgressRecord {
    fn default() -> Self {
        Self(
            NavSection::ALL
                .into_iter()
                .map(|section| (section.as_str().to_string(), false))
                .collect(),
        )
    }
}

impl ProgressRecord {
    /// Shallow-merge a persisted record over the defaults. Persisted values win
    /// key by key.
    #[must_use]
    pub fn merge_persisted(persisted: ProgressRecord) -> Self {
        let mut record = Self::default();
        record.0.extend(persisted.0);
        record
    }

    /// Sets `key` to complete, inserting it when absent.
    pub fn mark_complete(&mut self, key: &str) {
        self.0.insert(key.to_string(), true);
    }

    #[must_use]
    pub fn is_complete(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.0.values().filter(|done| **done).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.len()
    }

    /// Completed navigation sections, ignoring any extra keys.
    #[must_use]
    pub fn canonical_completed(&self) -> usize {
        NavSection::ALL
            .into_iter()
            .filter(|section| self.is_complete(section.as_str()))
            .count()
    }

    /// Share of completed keys in percent, within `0.0..=100.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.completed_count() as f64 / total as f64) * 100.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(key, done)| (key.as_str(), *done))
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Decode` unless `raw` is a flat JSON object of booleans.
    pub fn from_json(raw: &str) -> Result<Self, ProgressError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Encode` if the record cannot be serialized.
    pub fn to_json(&self) -> Result<String, ProgressError> {
        serde_json::to_string(&self.0).map_err(ProgressError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_the_five_sections() {
        let record = ProgressRecord::default();
        assert_eq!(record.total(), 5);
        assert_eq!(record.completed_count(), 0);
        for section in NavSection::ALL {
            assert!(!record.is_complete(section.as_str()));
        }
    }

    #[test]
    fn persisted_values_win_and_unknown_keys_are_kept() {
        let persisted = ProgressRecord::from_json(r#"{"visual":true,"bonus":true}"#).unwrap();
        let record = ProgressRecord::merge_persisted(persisted);
        assert!(record.is_complete("visual"));
        assert!(record.is_complete("bonus"));
        assert!(!record.is_complete("overview"));
        assert_eq!(record.total(), 6);
        assert_eq!(record.canonical_completed(), 1);
    }

    #[test]
    fn percentage_tracks_true_count_over_canonical_keys() {
        let mut record = ProgressRecord::default();
        let mut expected = 0.0;
        assert!((record.percentage() - expected).abs() < f64::EPSILON);
        for (done, section) in NavSection::ALL.into_iter().enumerate() {
            record.mark_complete(section.as_str());
            expected = 100.0 * (done + 1) as f64 / 5.0;
            assert!((record.percentage() - expected).abs() < 1e-9);
        }
        assert!((record.percentage() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn mark_complete_accepts_unknown_keys() {
        let mut record = ProgressRecord::default();
        record.mark_complete("not-a-section");
        assert_eq!(record.total(), 6);
        assert!(record.percentage() > 0.0 && record.percentage() <= 100.0);
        assert_eq!(record.canonical_completed(), 0);
    }

    #[test]
    fn decode_rejects_non_boolean_values() {
        assert!(ProgressRecord::from_json(r#"{"overview":"yes"}"#).is_err());
        assert!(ProgressRecord::from_json("[true]").is_err());
        assert!(ProgressRecord::from_json("not json").is_err());
    }

    #[test]
    fn json_is_a_flat_object() {
        let mut record = ProgressRecord::default();
        record.mark_complete("reference");
        let json = record.to_json().unwrap();
        assert!(json.contains(r#""reference":true"#));
        assert_eq!(ProgressRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn encode_failure_is_reported_not_replaced() {
        let cause = serde_json::from_str::<bool>("nope").unwrap_err();
        let err = ProgressError::Encode(cause);
        assert!(err.to_string().starts_with("progress could not be encoded"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
