use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{LearnView, LessonView, SectionView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LearnView)] Learn {},
        #[route("/learn/:section", SectionView)] Section { section: String },
        #[route("/lessons/:lesson_id", LessonView)] Lesson { lesson_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "header",
                Link { class: "brand", to: Route::Learn {}, "🦀 Rust Primer" }
                p { class: "tagline", "Learn Rust through reading, pictures and practice" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
