//! Content shown inside the visual, interactive, exercises and reference panes.
//!
//! Every item carries a [`PlaceholderId`] so a pane can find its content
//! without looking at what is currently rendered.

use crate::model::ids::PlaceholderId;
use crate::model::lesson::Difficulty;

//
// ─── VISUAL ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Memory,
    Ownership,
    Lifetimes,
    Types,
}

/// One slot of a memory diagram: the statement and what it leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySlot {
    pub code: String,
    pub effect: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagram {
    /// Stack and heap frames side by side.
    Memory {
        stack: Vec<MemorySlot>,
        heap: Vec<MemorySlot>,
    },
    /// A value moving from one binding to another.
    Move {
        from: String,
        to: String,
        type_name: String,
        caption: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualModule {
    pub id: PlaceholderId,
    pub title: String,
    pub description: String,
    pub kind: VisualKind,
    pub diagram: Diagram,
}

//
// ─── EXERCISES ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: PlaceholderId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub code: Option<String>,
    pub hint: Option<String>,
    pub solution: Option<String>,
}

//
// ─── REFERENCE ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceCategory {
    Syntax,
    Types,
    Errors,
    Patterns,
}

impl ReferenceCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceCategory::Syntax => "syntax",
            ReferenceCategory::Types => "types",
            ReferenceCategory::Errors => "errors",
            ReferenceCategory::Patterns => "patterns",
        }
    }
}

/// A quick-reference card. `content` is markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceItem {
    pub id: PlaceholderId,
    pub title: String,
    pub category: ReferenceCategory,
    pub content: String,
    pub examples: Vec<String>,
}

//
// ─── CODE EXAMPLES ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExample {
    pub id: PlaceholderId,
    pub title: String,
    pub code: String,
    pub expected_output: Option<String>,
}

/// Any item a pane placeholder can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    Visual(&'a VisualModule),
    Exercise(&'a Exercise),
    Reference(&'a ReferenceItem),
    Example(&'a CodeExample),
}
