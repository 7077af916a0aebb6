use crate::model::{Difficulty, Lesson, LessonSection, SectionKind};

use Difficulty::{Advanced, Beginner, Intermediate};
use SectionKind::{Exercises, Interactive, Traditional, Visual};

pub(super) fn builtin_lessons() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "getting-started",
            1,
            "Getting Started",
            "Install Rust, write your first program, and learn about Cargo",
            Beginner,
            "30 minutes",
        )
        .with_sections(vec![
            LessonSection::new(
                "installation",
                "Installation and Setup",
                Traditional,
                "⚙️",
                "Learn how to install Rust and set up your development environment",
                true,
            ),
            LessonSection::new(
                "hello-world",
                "Hello World",
                Interactive,
                "👋",
                "Write and run your first Rust program",
                true,
            ),
            LessonSection::new(
                "cargo-intro",
                "Cargo Introduction",
                Visual,
                "📦",
                "Understand Rust's build system and package manager",
                true,
            ),
        ]),
        Lesson::new(
            "common-concepts",
            2,
            "Common Programming Concepts",
            "Variables, data types, functions, and control flow in Rust",
            Beginner,
            "1 hour",
        )
        .with_prerequisites(&["getting-started"])
        .with_sections(vec![
            LessonSection::new(
                "variables",
                "Variables and Mutability",
                Interactive,
                "🔤",
                "Learn about variable declarations and mutability rules",
                true,
            ),
            LessonSection::new(
                "data-types",
                "Data Types",
                Visual,
                "🔢",
                "Explore Rust's type system with interactive examples",
                true,
            ),
            LessonSection::new(
                "functions",
                "Functions",
                Exercises,
                "⚡",
                "Practice writing and calling functions",
                true,
            ),
            LessonSection::new(
                "control-flow",
                "Control Flow",
                Interactive,
                "🔀",
                "Master if expressions, loops, and pattern matching",
                true,
            ),
        ]),
        Lesson::new(
            "ownership",
            3,
            "Understanding Ownership",
            "Rust's most unique feature - ownership, borrowing, and lifetimes",
            Intermediate,
            "2 hours",
        )
        .with_prerequisites(&["common-concepts"])
        .with_sections(vec![
            LessonSection::new(
                "ownership-rules",
                "What is Ownership?",
                Visual,
                "🏠",
                "Visualize how Rust manages memory without a garbage collector",
                false,
            ),
            LessonSection::new(
                "references-borrowing",
                "References and Borrowing",
                Interactive,
                "🔗",
                "Interactive examples of borrowing rules and lifetime",
                false,
            ),
            LessonSection::new(
                "slices",
                "The Slice Type",
                Exercises,
                "🍰",
                "Practice working with string and array slices",
                false,
            ),
        ]),
        Lesson::new(
            "structs",
            4,
            "Using Structs",
            "Structure related data and define methods",
            Beginner,
            "45 minutes",
        )
        .with_prerequisites(&["ownership"])
        .with_sections(vec![
            LessonSection::new(
                "defining-structs",
                "Defining and Instantiating Structs",
                Interactive,
                "📦",
                "Create custom data types with structs",
                false,
            ),
            LessonSection::new(
                "method-syntax",
                "Method Syntax",
                Exercises,
                "⚙️",
                "Add behavior to structs with methods",
                false,
            ),
        ]),
        Lesson::new(
            "enums",
            5,
            "Enums and Pattern Matching",
            "Define types with multiple variants and handle them safely",
            Intermediate,
            "1.5 hours",
        )
        .with_prerequisites(&["structs"])
        .with_sections(vec![
            LessonSection::new(
                "defining-enums",
                "Defining an Enum",
                Visual,
                "🔀",
                "Understand enum variants and their uses",
                false,
            ),
            LessonSection::new(
                "option-enum",
                "The Option Enum",
                Interactive,
                "❓",
                "Handle null values safely with Option<T>",
                false,
            ),
            LessonSection::new(
                "match-control",
                "Match Control Flow",
                Exercises,
                "🎯",
                "Master pattern matching with match expressions",
                false,
            ),
        ]),
        Lesson::new(
            "modules",
            6,
            "Managing Growing Projects",
            "Organize code with modules, packages, and crates",
            Intermediate,
            "1 hour",
        )
        .with_prerequisites(&["enums"])
        .with_sections(vec![
            LessonSection::new(
                "packages-crates",
                "Packages and Crates",
                Visual,
                "📚",
                "Understand Rust's module system architecture",
                false,
            ),
            LessonSection::new(
                "defining-modules",
                "Defining Modules",
                Interactive,
                "🏗️",
                "Organize code with modules and visibility",
                false,
            ),
        ]),
        Lesson::new(
            "collections",
            7,
            "Common Collections",
            "Work with vectors, strings, and hash maps",
            Beginner,
            "1.5 hours",
        )
        .with_prerequisites(&["modules"])
        .with_sections(vec![
            LessonSection::new(
                "vectors",
                "Storing Lists with Vectors",
                Interactive,
                "📋",
                "Dynamic arrays and list operations",
                false,
            ),
            LessonSection::new(
                "strings",
                "Storing Text with Strings",
                Exercises,
                "📝",
                "String manipulation and UTF-8 handling",
                false,
            ),
            LessonSection::new(
                "hashmaps",
                "Hash Maps",
                Visual,
                "🗂️",
                "Key-value storage and retrieval",
                false,
            ),
        ]),
        Lesson::new(
            "error-handling",
            8,
            "Error Handling",
            "Handle failures gracefully with Result and panic",
            Intermediate,
            "1 hour",
        )
        .with_prerequisites(&["collections"])
        .with_sections(vec![
            LessonSection::new(
                "panic",
                "Unrecoverable Errors with panic!",
                Traditional,
                "💥",
                "When and how to use panic for unrecoverable errors",
                false,
            ),
            LessonSection::new(
                "result",
                "Recoverable Errors with Result",
                Interactive,
                "✅",
                "Handle errors gracefully with Result<T, E>",
                false,
            ),
        ]),
        Lesson::new(
            "generics-traits-lifetimes",
            9,
            "Generic Types, Traits, and Lifetimes",
            "Write flexible, reusable code with generics and traits",
            Advanced,
            "2.5 hours",
        )
        .with_prerequisites(&["error-handling"])
        .with_sections(vec![
            LessonSection::new(
                "generics",
                "Generic Data Types",
                Visual,
                "🧬",
                "Visualize how generics work at compile time",
                false,
            ),
            LessonSection::new(
                "traits",
                "Traits: Defining Shared Behavior",
                Interactive,
                "🎭",
                "Define and implement traits for shared behavior",
                false,
            ),
            LessonSection::new(
                "lifetimes",
                "Validating References with Lifetimes",
                Exercises,
                "⏱️",
                "Master lifetime annotations and borrow checker",
                false,
            ),
        ]),
        Lesson::new(
            "testing",
            10,
            "Writing Automated Tests",
            "Test your code with unit and integration tests",
            Intermediate,
            "1 hour",
        )
        .with_prerequisites(&["generics-traits-lifetimes"])
        .with_sections(vec![
            LessonSection::new(
                "writing-tests",
                "How to Write Tests",
                Interactive,
                "🧪",
                "Write and run unit tests",
                false,
            ),
            LessonSection::new(
                "test-organization",
                "Test Organization",
                Exercises,
                "📊",
                "Organize tests and measure coverage",
                false,
            ),
        ]),
    ]
}
