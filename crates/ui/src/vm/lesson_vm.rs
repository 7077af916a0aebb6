use primer_core::ContentRegistry;
use primer_core::model::{LearningPath, Lesson};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: String,
    pub number: u32,
    pub title: String,
    pub description: String,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub estimated_time: String,
    pub sections_ready: String,
    pub available: bool,
}

impl LessonCardVm {
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().as_str().to_string(),
            number: lesson.number(),
            title: lesson.title().to_string(),
            description: lesson.description().to_string(),
            difficulty: lesson.difficulty().label(),
            difficulty_class: lesson.difficulty().as_str(),
            estimated_time: lesson.estimated_time().to_string(),
            sections_ready: format!(
                "{}/{} sections",
                lesson.implemented_sections(),
                lesson.sections().len()
            ),
            available: lesson.is_available(),
        }
    }
}

#[must_use]
pub fn map_lesson_cards(registry: &ContentRegistry) -> Vec<LessonCardVm> {
    registry
        .lessons()
        .iter()
        .map(LessonCardVm::from_lesson)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathStepVm {
    pub id: String,
    /// `None` when the lesson has not been written yet.
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningPathVm {
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub steps: Vec<PathStepVm>,
    pub missing: usize,
}

impl LearningPathVm {
    #[must_use]
    pub fn from_path(path: &LearningPath, registry: &ContentRegistry) -> Self {
        let steps = path
            .lessons()
            .iter()
            .map(|id| PathStepVm {
                id: id.as_str().to_string(),
                title: registry.lesson(id.as_str()).map(|l| l.title().to_string()),
            })
            .collect();
        Self {
            title: path.title().to_string(),
            description: path.description().to_string(),
            estimated_time: path.estimated_time().to_string(),
            steps,
            missing: path.missing_lessons(registry.lessons()).len(),
        }
    }
}

#[must_use]
pub fn map_learning_paths(registry: &ContentRegistry) -> Vec<LearningPathVm> {
    registry
        .learning_paths()
        .iter()
        .map(|path| LearningPathVm::from_path(path, registry))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonSectionVm {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub kind: &'static str,
    pub description: String,
    pub implemented: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub card: LessonCardVm,
    pub sections: Vec<LessonSectionVm>,
    pub prerequisites: Vec<(String, String)>,
}

#[must_use]
pub fn map_lesson_detail(registry: &ContentRegistry, id: &str) -> Option<LessonDetailVm> {
    let lesson = registry.lesson(id)?;
    let sections = lesson
        .sections()
        .iter()
        .map(|section| LessonSectionVm {
            id: section.id().as_str().to_string(),
            title: section.title().to_string(),
            icon: section.icon().to_string(),
            kind: section.kind().as_str(),
            description: section.description().to_string(),
            implemented: section.is_implemented(),
        })
        .collect();
    let prerequisites = registry
        .prerequisites_of(id)
        .into_iter()
        .map(|pre| (pre.id().as_str().to_string(), pre.title().to_string()))
        .collect();
    Some(LessonDetailVm {
        card: LessonCardVm::from_lesson(lesson),
        sections,
        prerequisites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lessons_map_in_order() {
        let cards = map_lesson_cards(ContentRegistry::builtin());
        assert_eq!(cards.len(), 10);
        assert!(cards.windows(2).all(|pair| pair[0].number < pair[1].number));
        assert_eq!(cards[0].id, "getting-started");
    }

    #[test]
    fn paths_flag_lessons_that_do_not_exist() {
        let paths = map_learning_paths(ContentRegistry::builtin());
        assert_eq!(paths.len(), 3);
        let advanced = paths.last().unwrap();
        assert!(advanced.missing > 0);
        assert_eq!(
            advanced.steps.iter().filter(|s| s.title.is_none()).count(),
            advanced.missing
        );
        assert_eq!(paths[0].missing, 0);
    }

    #[test]
    fn detail_lists_prerequisites() {
        let registry = ContentRegistry::builtin();
        let with_prereq = registry
            .lessons()
            .iter()
            .find(|l| !l.prerequisites().is_empty())
            .unwrap();
        let detail = map_lesson_detail(registry, with_prereq.id().as_str()).unwrap();
        assert_eq!(detail.prerequisites.len(), with_prereq.prerequisites().len());
        assert_eq!(detail.sections.len(), with_prereq.sections().len());
        assert!(map_lesson_detail(registry, "no-such-lesson").is_none());
    }
}
