mod ids;
mod lesson;
pub mod nav;
pub mod pane;
mod path;
mod progress;

pub use ids::{LessonId, LessonSectionId, ParseIdError, PlaceholderId};
pub use lesson::{Difficulty, Lesson, LessonSection, SectionKind};
pub use nav::{NavSection, UnknownSection};
pub use pane::{
    CodeExample, Diagram, Exercise, MemorySlot, Placeholder, ReferenceCategory, ReferenceItem,
    VisualKind, VisualModule,
};
pub use path::LearningPath;
pub use progress::{ProgressError, ProgressRecord};
