use primer_core::model::{NavSection, ProgressRecord};

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressRowVm {
    pub section: NavSection,
    pub label: &'static str,
    pub complete: bool,
}

/// Display shape of the learner's progress.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub percentage: f64,
    pub canonical_completed: usize,
    pub rows: Vec<ProgressRowVm>,
    /// Set when the last change could not be saved.
    pub unsaved: bool,
}

impl ProgressVm {
    #[must_use]
    pub fn from_record(record: &ProgressRecord) -> Self {
        let rows = NavSection::ALL
            .into_iter()
            .map(|section| ProgressRowVm {
                section,
                label: section.label(),
                complete: record.is_complete(section.as_str()),
            })
            .collect();
        Self {
            percentage: record.percentage().clamp(0.0, 100.0),
            canonical_completed: record.canonical_completed(),
            rows,
            unsaved: false,
        }
    }

    #[must_use]
    pub fn with_unsaved(mut self, unsaved: bool) -> Self {
        self.unsaved = unsaved;
        self
    }

    /// Inline style applied to every `.progress-fill` element.
    #[must_use]
    pub fn fill_style(&self) -> String {
        format!("width: {}%", format_percentage(self.percentage))
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} of {} sections complete",
            self.canonical_completed,
            NavSection::ALL.len()
        )
    }

    #[must_use]
    pub fn is_complete(&self, section: NavSection) -> bool {
        self.rows
            .iter()
            .any(|row| row.section == section && row.complete)
    }
}

/// Whole numbers print without a fraction; others keep one decimal.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
