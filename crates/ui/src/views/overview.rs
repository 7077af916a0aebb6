use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ProgressVm, map_learning_paths, map_lesson_cards};

use super::progress::ProgressBar;

#[component]
pub fn OverviewPane(progress: ProgressVm) -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = map_lesson_cards(ctx.content());
    let paths = map_learning_paths(ctx.content());

    rsx! {
        h2 { "Welcome to Rust" }
        p { class: "lead",
            "Rust is a systems language focused on safety, speed and concurrency. "
            "Work through the sections in any order; your progress is saved on this machine."
        }

        div { class: "overview-progress",
            h3 { "Your progress" }
            ProgressBar { progress: progress.clone() }
            ul { class: "progress-list",
                for row in progress.rows.iter() {
                    li {
                        key: "{row.section}",
                        class: if row.complete { "done" } else { "todo" },
                        if row.complete { "✓ " } else { "○ " }
                        "{row.label}"
                    }
                }
            }
        }

        h3 { "Lessons" }
        div { class: "lesson-grid",
            for lesson in lessons {
                Link {
                    key: "{lesson.id}",
                    class: "lesson-card",
                    to: Route::Lesson { lesson_id: lesson.id.clone() },
                    span { class: "lesson-number", "{lesson.number}" }
                    h4 { "{lesson.title}" }
                    p { "{lesson.description}" }
                    div { class: "lesson-meta",
                        span { class: "difficulty {lesson.difficulty_class}", "{lesson.difficulty}" }
                        span { "⏱ {lesson.estimated_time}" }
                        span { "{lesson.sections_ready}" }
                    }
                }
            }
        }

        h3 { "Learning paths" }
        div { class: "path-grid",
            for path in paths {
                div { key: "{path.title}", class: "path-card",
                    h4 { "{path.title}" }
                    p { "{path.description}" }
                    p { class: "path-time", "{path.estimated_time}" }
                    ol {
                        for step in path.steps.iter() {
                            {match &step.title {
                                Some(title) => rsx! {
                                    li { key: "{step.id}",
                                        Link { to: Route::Lesson { lesson_id: step.id.clone() }, "{title}" }
                                    }
                                },
                                None => rsx! {
                                    li { key: "{step.id}", class: "coming-soon", "{step.id} (coming soon)" }
                                },
                            }}
                        }
                    }
                }
            }
        }
    }
}
