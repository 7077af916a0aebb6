//! Simulated program output for the interactive editor.
//!
//! This does not compile or run anything. It looks for two literal patterns
//! in the source text and produces canned output.

use std::sync::LazyLock;

use regex::Regex;

pub const HELLO_WORLD_PROGRAM: &str = "fn main() {\n    println!(\"Hello, world!\");\n}";

pub const OUTPUT_PROMPT: &str = "Click \"Run Code\" to see output";

pub const RUNNING_BANNER: &str = "Simulating Rust execution...\n";

pub const COMPILED_MESSAGE: &str = "Program compiled successfully!\n(No output to display)";

pub const MISSING_MAIN_MESSAGE: &str = "Error: main function not found\n";

const PRINT_MACRO: &str = "println!";
const ENTRY_POINT: &str = "fn main()";

static PRINT_CALL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"println!\("([^"]*)"\)"#).expect("print pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// One entry per `println!("...")` call, in source order.
    Printed(Vec<String>),
    /// The print macro appears but never with a plain string literal.
    DefaultGreeting,
    Compiled,
    MissingMain,
}

impl RunOutcome {
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            RunOutcome::Printed(lines) => lines.iter().fold(String::new(), |mut out, line| {
                out.push_str(line);
                out.push('\n');
                out
            }),
            RunOutcome::DefaultGreeting => "Hello, world!\n".to_string(),
            RunOutcome::Compiled => COMPILED_MESSAGE.to_string(),
            RunOutcome::MissingMain => MISSING_MAIN_MESSAGE.to_string(),
        }
    }
}

#[must_use]
pub fn simulate(code: &str) -> RunOutcome {
    if code.contains(PRINT_MACRO) {
        let lines: Vec<String> = PRINT_CALL
            .captures_iter(code)
            .map(|caps| caps[1].to_string())
            .collect();
        if lines.is_empty() {
            RunOutcome::DefaultGreeting
        } else {
            RunOutcome::Printed(lines)
        }
    } else if code.contains(ENTRY_POINT) {
        RunOutcome::Compiled
    } else {
        RunOutcome::MissingMain
    }
}
