//! Static lesson and pane content.
//!
//! The builtin registry is assembled on first access and shared read-only for
//! the rest of the process.

mod lessons;
mod panes;

use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;

use crate::model::{
    CodeExample, Exercise, LearningPath, Lesson, LessonId, Placeholder, PlaceholderId,
    ReferenceItem, VisualModule,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(String),
    #[error("lesson {lesson} has duplicate section id: {section}")]
    DuplicateSection { lesson: String, section: String },
    #[error("lesson {lesson} requires unknown lesson {prerequisite}")]
    UnknownPrerequisite { lesson: String, prerequisite: String },
    #[error("lesson {lesson} is numbered {number}, expected a number above {previous}")]
    OutOfOrder {
        lesson: String,
        number: u32,
        previous: u32,
    },
    #[error("duplicate placeholder id: {0}")]
    DuplicatePlaceholder(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    lessons: Vec<Lesson>,
    learning_paths: Vec<LearningPath>,
    visual_modules: Vec<VisualModule>,
    exercises: Vec<Exercise>,
    reference_items: Vec<ReferenceItem>,
    code_examples: Vec<CodeExample>,
}

static BUILTIN: LazyLock<ContentRegistry> = LazyLock::new(|| ContentRegistry {
    lessons: lessons::builtin_lessons(),
    learning_paths: panes::builtin_learning_paths(),
    visual_modules: panes::builtin_visual_modules(),
    exercises: panes::builtin_exercises(),
    reference_items: panes::builtin_reference_items(),
    code_examples: panes::builtin_code_examples(),
});

impl ContentRegistry {
    /// The curriculum shipped with the app.
    #[must_use]
    pub fn builtin() -> &'static ContentRegistry {
        &BUILTIN
    }

    #[must_use]
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id().as_str() == id)
    }

    /// Resolved prerequisites of a lesson, skipping ids without a record.
    #[must_use]
    pub fn prerequisites_of(&self, id: &str) -> Vec<&Lesson> {
        self.lesson(id)
            .map(|lesson| {
                lesson
                    .prerequisites()
                    .iter()
                    .filter_map(|req| self.lesson(req.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn learning_paths(&self) -> &[LearningPath] {
        &self.learning_paths
    }

    #[must_use]
    pub fn visual_modules(&self) -> &[VisualModule] {
        &self.visual_modules
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn reference_items(&self) -> &[ReferenceItem] {
        &self.reference_items
    }

    #[must_use]
    pub fn code_examples(&self) -> &[CodeExample] {
        &self.code_examples
    }

    #[must_use]
    pub fn placeholder(&self, id: &str) -> Option<Placeholder<'_>> {
        if let Some(item) = self.visual_modules.iter().find(|m| m.id.as_str() == id) {
            return Some(Placeholder::Visual(item));
        }
        if let Some(item) = self.exercises.iter().find(|e| e.id.as_str() == id) {
            return Some(Placeholder::Exercise(item));
        }
        if let Some(item) = self.reference_items.iter().find(|r| r.id.as_str() == id) {
            return Some(Placeholder::Reference(item));
        }
        self.code_examples
            .iter()
            .find(|c| c.id.as_str() == id)
            .map(Placeholder::Example)
    }

    fn placeholder_ids(&self) -> impl Iterator<Item = &PlaceholderId> {
        self.visual_modules
            .iter()
            .map(|m| &m.id)
            .chain(self.exercises.iter().map(|e| &e.id))
            .chain(self.reference_items.iter().map(|r| &r.id))
            .chain(self.code_examples.iter().map(|c| &c.id))
    }

    /// Check the structural invariants of the registry.
    ///
    /// Learning paths may point at lessons that do not exist yet; that is not
    /// an error (see [`LearningPath::missing_lessons`]).
    ///
    /// # Errors
    ///
    /// Returns the first `ContentError` found.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen: HashSet<&LessonId> = HashSet::new();
        let mut previous = 0;
        for lesson in &self.lessons {
            if !seen.insert(lesson.id()) {
                return Err(ContentError::DuplicateLesson(lesson.id().to_string()));
            }
            if lesson.number() <= previous {
                return Err(ContentError::OutOfOrder {
                    lesson: lesson.id().to_string(),
                    number: lesson.number(),
                    previous,
                });
            }
            previous = lesson.number();

            let mut sections = HashSet::new();
            for section in lesson.sections() {
                if !sections.insert(section.id()) {
                    return Err(ContentError::DuplicateSection {
                        lesson: lesson.id().to_string(),
                        section: section.id().to_string(),
                    });
                }
            }
        }

        for lesson in &self.lessons {
            if let Some(missing) = lesson
                .prerequisites()
                .iter()
                .find(|req| !seen.contains(req))
            {
                return Err(ContentError::UnknownPrerequisite {
                    lesson: lesson.id().to_string(),
                    prerequisite: missing.to_string(),
                });
            }
        }

        let mut placeholders = HashSet::new();
        for id in self.placeholder_ids() {
            if !placeholders.insert(id) {
                return Err(ContentError::DuplicatePlaceholder(id.to_string()));
            }
        }

        Ok(())
    }
}
