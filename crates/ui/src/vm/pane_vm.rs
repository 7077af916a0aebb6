//! Placeholder slots of the content panes, resolved against the registry.
//!
//! Each pane declares the placeholder ids it shows. Ids without a matching
//! entry of the right kind are skipped.

use primer_core::ContentRegistry;
use primer_core::model::{CodeExample, Diagram, Placeholder};

use super::markdown_vm::{code_block_html, markdown_to_html};

pub const VISUAL_SLOTS: &[&str] = &["memory-diagram", "ownership-transfer"];
pub const EXERCISE_SLOTS: &[&str] = &["fix-the-variables", "borrow-a-string"];
pub const REFERENCE_SLOTS: &[&str] = &["basic-syntax", "common-types", "error-messages"];
pub const EXAMPLE_SLOTS: &[&str] = &["hello-world", "two-lines", "silent-main"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub diagram: Diagram,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: &'static str,
    pub code_html: Option<String>,
    pub hint: Option<String>,
    pub solution_html: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceVm {
    pub id: String,
    pub title: String,
    pub category: &'static str,
    pub content_html: String,
    pub examples_html: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleVm {
    pub id: String,
    pub title: String,
    pub code: String,
    pub expected_output: Option<String>,
}

impl From<&CodeExample> for ExampleVm {
    fn from(example: &CodeExample) -> Self {
        Self {
            id: example.id.as_str().to_string(),
            title: example.title.clone(),
            code: example.code.clone(),
            expected_output: example.expected_output.clone(),
        }
    }
}

fn resolve<'a, T>(
    registry: &'a ContentRegistry,
    slots: &[&str],
    pick: impl Fn(Placeholder<'a>) -> Option<T>,
) -> Vec<T> {
    slots
        .iter()
        .filter_map(|id| registry.placeholder(id))
        .filter_map(pick)
        .collect()
}

#[must_use]
pub fn map_visuals(registry: &ContentRegistry, slots: &[&str]) -> Vec<VisualVm> {
    resolve(registry, slots, |placeholder| match placeholder {
        Placeholder::Visual(module) => Some(VisualVm {
            id: module.id.as_str().to_string(),
            title: module.title.clone(),
            description: module.description.clone(),
            diagram: module.diagram.clone(),
        }),
        _ => None,
    })
}

#[must_use]
pub fn map_exercises(registry: &ContentRegistry, slots: &[&str]) -> Vec<ExerciseVm> {
    resolve(registry, slots, |placeholder| match placeholder {
        Placeholder::Exercise(exercise) => Some(ExerciseVm {
            id: exercise.id.as_str().to_string(),
            title: exercise.title.clone(),
            description: exercise.description.clone(),
            difficulty: exercise.difficulty.label(),
            code_html: exercise.code.as_deref().map(|c| code_block_html(c, "rust")),
            hint: exercise.hint.clone(),
            solution_html: exercise.solution.as_deref().map(|c| code_block_html(c, "rust")),
        }),
        _ => None,
    })
}

#[must_use]
pub fn map_references(registry: &ContentRegistry, slots: &[&str]) -> Vec<ReferenceVm> {
    resolve(registry, slots, |placeholder| match placeholder {
        Placeholder::Reference(item) => Some(ReferenceVm {
            id: item.id.as_str().to_string(),
            title: item.title.clone(),
            category: item.category.as_str(),
            content_html: markdown_to_html(&item.content),
            examples_html: item
                .examples
                .iter()
                .map(|code| code_block_html(code, "rust"))
                .collect(),
        }),
        _ => None,
    })
}

#[must_use]
pub fn map_examples(registry: &ContentRegistry, slots: &[&str]) -> Vec<ExampleVm> {
    resolve(registry, slots, |placeholder| match placeholder {
        Placeholder::Example(example) => Some(ExampleVm::from(example)),
        _ => None,
    })
}
