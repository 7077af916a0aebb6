use crate::model::ids::LessonId;
use crate::model::lesson::{Difficulty, Lesson};

/// A curated track through the lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningPath {
    track: Difficulty,
    title: String,
    description: String,
    lessons: Vec<LessonId>,
    estimated_time: String,
}

impl LearningPath {
    #[must_use]
    pub fn new(
        track: Difficulty,
        title: impl Into<String>,
        description: impl Into<String>,
        lessons: &[&str],
        estimated_time: impl Into<String>,
    ) -> Self {
        Self {
            track,
            title: title.into(),
            description: description.into(),
            lessons: lessons.iter().map(|id| LessonId::new(*id)).collect(),
            estimated_time: estimated_time.into(),
        }
    }

    #[must_use]
    pub fn track(&self) -> Difficulty {
        self.track
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn lessons(&self) -> &[LessonId] {
        &self.lessons
    }

    #[must_use]
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    /// Lesson ids on this path that have no lesson record yet.
    #[must_use]
    pub fn missing_lessons<'a>(&'a self, known: &[Lesson]) -> Vec<&'a LessonId> {
        self.lessons
            .iter()
            .filter(|id| !known.iter().any(|lesson| lesson.id() == *id))
            .collect()
    }
}
