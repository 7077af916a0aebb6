mod editor_vm;
mod lesson_vm;
mod markdown_vm;
mod pane_vm;
mod progress_vm;
mod section_vm;

pub use editor_vm::EditorVm;
pub use lesson_vm::{
    LearningPathVm, LessonCardVm, LessonDetailVm, LessonSectionVm, PathStepVm,
    map_learning_paths, map_lesson_cards, map_lesson_detail,
};
pub use markdown_vm::{code_block_html, markdown_to_html, sanitize_html};
pub use pane_vm::{
    EXAMPLE_SLOTS, EXERCISE_SLOTS, ExampleVm, ExerciseVm, REFERENCE_SLOTS, ReferenceVm,
    VISUAL_SLOTS, VisualVm, map_examples, map_exercises, map_references, map_visuals,
};
pub use progress_vm::{ProgressRowVm, ProgressVm, format_percentage};
pub use section_vm::{
    FADE_IN_DURATION, Initializer, SectionController, SectionSwitch, shortcut_target,
};
