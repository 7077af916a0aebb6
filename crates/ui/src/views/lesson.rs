use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_lesson_detail;

#[component]
pub fn LessonView(lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let Some(detail) = map_lesson_detail(ctx.content(), &lesson_id) else {
        return rsx! {
            div { class: "page",
                h2 { "Lesson not found" }
                p { "There is no lesson called \"{lesson_id}\"." }
                Link { to: Route::Learn {}, "Back to overview" }
            }
        };
    };
    let card = detail.card;

    rsx! {
        div { class: "page lesson",
            Link { class: "back", to: Route::Learn {}, "← All lessons" }
            h2 { "Chapter {card.number}: {card.title}" }
            p { class: "lead", "{card.description}" }
            div { class: "lesson-meta",
                span { class: "difficulty {card.difficulty_class}", "{card.difficulty}" }
                span { "⏱ {card.estimated_time}" }
                span { "{card.sections_ready}" }
            }

            if !detail.prerequisites.is_empty() {
                div { class: "prerequisites",
                    h3 { "Before you start" }
                    ul {
                        for (id, title) in detail.prerequisites {
                            li { key: "{id}",
                                Link { to: Route::Lesson { lesson_id: id.clone() }, "{title}" }
                            }
                        }
                    }
                }
            }

            h3 { "Sections" }
            ul { class: "lesson-sections",
                for section in detail.sections {
                    li {
                        key: "{section.id}",
                        class: if section.implemented { "lesson-section ready" } else { "lesson-section pending" },
                        "data-kind": section.kind,
                        span { class: "icon", "{section.icon}" }
                        div {
                            h4 { "{section.title}" }
                            p { "{section.description}" }
                            if !section.implemented {
                                span { class: "coming-soon", "Coming soon" }
                            }
                        }
                    }
                }
            }
        }
    }
}
