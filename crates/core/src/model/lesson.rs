use serde::{Deserialize, Serialize};

use crate::model::ids::{LessonId, LessonSectionId};

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

//
// ─── SECTIONS ──────────────────────────────────────────────────────────────────
//

/// Presentation style of a lesson section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Traditional,
    Visual,
    Interactive,
    Exercises,
}

impl SectionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Traditional => "traditional",
            SectionKind::Visual => "visual",
            SectionKind::Interactive => "interactive",
            SectionKind::Exercises => "exercises",
        }
    }
}

/// A sub-unit of instructional content inside a `Lesson`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonSection {
    id: LessonSectionId,
    title: String,
    kind: SectionKind,
    icon: String,
    description: String,
    implemented: bool,
}

impl LessonSection {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: SectionKind,
        icon: impl Into<String>,
        description: impl Into<String>,
        implemented: bool,
    ) -> Self {
        Self {
            id: LessonSectionId::new(id),
            title: title.into(),
            kind,
            icon: icon.into(),
            description: description.into(),
            implemented,
        }
    }

    #[must_use]
    pub fn id(&self) -> &LessonSectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_implemented(&self) -> bool {
        self.implemented
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A lesson record. Built once when the content registry is first touched and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    number: u32,
    title: String,
    description: String,
    difficulty: Difficulty,
    estimated_time: String,
    sections: Vec<LessonSection>,
    prerequisites: Vec<LessonId>,
}

impl Lesson {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        number: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        estimated_time: impl Into<String>,
    ) -> Self {
        Self {
            id: LessonId::new(id),
            number,
            title: title.into(),
            description: description.into(),
            difficulty,
            estimated_time: estimated_time.into(),
            sections: Vec::new(),
            prerequisites: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sections(mut self, sections: Vec<LessonSection>) -> Self {
        self.sections = sections;
        self
    }

    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: &[&str]) -> Self {
        self.prerequisites = prerequisites.iter().map(|id| LessonId::new(*id)).collect();
        self
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
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
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    #[must_use]
    pub fn sections(&self) -> &[LessonSection] {
        &self.sections
    }

    #[must_use]
    pub fn prerequisites(&self) -> &[LessonId] {
        &self.prerequisites
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&LessonSection> {
        self.sections.iter().find(|s| s.id().as_str() == id)
    }

    /// Number of sections whose content is already written.
    #[must_use]
    pub fn implemented_sections(&self) -> usize {
        self.sections.iter().filter(|s| s.is_implemented()).count()
    }

    /// A lesson is available once every one of its sections is implemented.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.sections.is_empty() && self.implemented_sections() == self.sections.len()
    }
}
