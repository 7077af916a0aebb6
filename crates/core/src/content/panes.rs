use crate::model::{
    CodeExample, Diagram, Difficulty, Exercise, LearningPath, MemorySlot, PlaceholderId,
    ReferenceCategory, ReferenceItem, VisualKind, VisualModule,
};

fn slot(code: &str, effect: &str) -> MemorySlot {
    MemorySlot {
        code: code.to_string(),
        effect: effect.to_string(),
    }
}

pub(super) fn builtin_visual_modules() -> Vec<VisualModule> {
    vec![
        VisualModule {
            id: PlaceholderId::new("memory-diagram"),
            title: "Stack and Heap".to_string(),
            description: "Interactive memory diagrams showing where values live.".to_string(),
            kind: VisualKind::Memory,
            diagram: Diagram::Memory {
                stack: vec![slot("let x = 5;", "Stack: [x: 5]")],
                heap: vec![slot(r#"let s = String::from("hello");"#, r#"Heap: ["hello"]"#)],
            },
        },
        VisualModule {
            id: PlaceholderId::new("ownership-transfer"),
            title: "Ownership Transfer".to_string(),
            description: "Ownership transfer between variables, step by step.".to_string(),
            kind: VisualKind::Ownership,
            diagram: Diagram::Move {
                from: "Variable A".to_string(),
                to: "Variable B".to_string(),
                type_name: "String".to_string(),
                caption: "Ownership moves from A to B".to_string(),
            },
        },
    ]
}

pub(super) fn builtin_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: PlaceholderId::new("fix-the-variables"),
            title: "Challenge: Fix the Variables".to_string(),
            description: "Make this code compile by adding the correct keyword:".to_string(),
            difficulty: Difficulty::Beginner,
            code: Some(
                "let x = 5;\nx = 6; // Error: cannot assign twice to immutable variable"
                    .to_string(),
            ),
            hint: Some("Use the mut keyword!".to_string()),
            solution: Some("let mut x = 5;".to_string()),
        },
        Exercise {
            id: PlaceholderId::new("borrow-a-string"),
            title: "Challenge: Borrow Instead of Move".to_string(),
            description: "Change the call so `s` can still be printed afterwards:".to_string(),
            difficulty: Difficulty::Intermediate,
            code: Some(
                "fn len(s: String) -> usize { s.len() }\n\nlet s = String::from(\"hi\");\nlet n = len(s);\nprintln!(\"{s} has {n} bytes\");"
                    .to_string(),
            ),
            hint: Some("Take a reference with &.".to_string()),
            solution: Some("fn len(s: &str) -> usize { s.len() }\nlet n = len(&s);".to_string()),
        },
    ]
}

pub(super) fn builtin_reference_items() -> Vec<ReferenceItem> {
    vec![
        ReferenceItem {
            id: PlaceholderId::new("basic-syntax"),
            title: "Basic Syntax".to_string(),
            category: ReferenceCategory::Syntax,
            content: "#### Variables\n\nBindings are immutable unless declared with `mut`.\n\n#### Functions\n\nParameters and return types are always annotated.\n".to_string(),
            examples: vec![
                "let x = 5;          // immutable\nlet mut y = 10;     // mutable".to_string(),
                "fn function_name(param: Type) -> ReturnType {\n    // function body\n}"
                    .to_string(),
            ],
        },
        ReferenceItem {
            id: PlaceholderId::new("common-types"),
            title: "Common Types".to_string(),
            category: ReferenceCategory::Types,
            content: "#### Primitive Types\n\n- `i32, i64` - signed integers\n- `u32, u64` - unsigned integers\n- `f32, f64` - floating point\n- `bool` - boolean\n- `char` - character\n- `&str, String` - strings\n".to_string(),
            examples: Vec::new(),
        },
        ReferenceItem {
            id: PlaceholderId::new("error-messages"),
            title: "Error Messages".to_string(),
            category: ReferenceCategory::Errors,
            content: "#### Common Errors\n\n- **E0382:** Use after move\n- **E0502:** Cannot borrow as mutable\n- **E0384:** Cannot assign to immutable variable\n".to_string(),
            examples: Vec::new(),
        },
    ]
}

pub(super) fn builtin_code_examples() -> Vec<CodeExample> {
    vec![
        CodeExample {
            id: PlaceholderId::new("hello-world"),
            title: "Hello World".to_string(),
            code: crate::runner::HELLO_WORLD_PROGRAM.to_string(),
            expected_output: Some("Hello, world!\n".to_string()),
        },
        CodeExample {
            id: PlaceholderId::new("two-lines"),
            title: "Printing Twice".to_string(),
            code: "fn main() {\n    println!(\"Hello\");\n    println!(\"Ferris\");\n}".to_string(),
            expected_output: Some("Hello\nFerris\n".to_string()),
        },
        CodeExample {
            id: PlaceholderId::new("silent-main"),
            title: "A Quiet Program".to_string(),
            code: "fn main() {\n    let answer = 6 * 7;\n}".to_string(),
            expected_output: None,
        },
    ]
}

pub(super) fn builtin_learning_paths() -> Vec<LearningPath> {
    vec![
        LearningPath::new(
            Difficulty::Beginner,
            "🚀 Beginner Track",
            "Start your Rust journey with fundamentals",
            &[
                "getting-started",
                "common-concepts",
                "ownership",
                "structs",
                "collections",
            ],
            "6-8 hours",
        ),
        LearningPath::new(
            Difficulty::Intermediate,
            "🏃 Intermediate Track",
            "Build practical skills and understanding",
            &[
                "enums",
                "modules",
                "error-handling",
                "testing",
                "generics-traits-lifetimes",
            ],
            "8-12 hours",
        ),
        LearningPath::new(
            Difficulty::Advanced,
            "👨‍💻 Advanced Track",
            "Master advanced concepts and patterns",
            &[
                "smart-pointers",
                "concurrency",
                "oop-features",
                "patterns",
                "advanced-features",
            ],
            "15-20 hours",
        ),
    ]
}
