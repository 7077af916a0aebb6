mod exercises;
mod interactive;
mod learn;
mod lesson;
mod overview;
mod progress;
mod reference;
mod visual;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use learn::{LearnView, SectionView};
pub use lesson::LessonView;
