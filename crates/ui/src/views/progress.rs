use dioxus::prelude::*;
use primer_core::model::NavSection;

use crate::vm::ProgressVm;

#[component]
pub fn ProgressBar(progress: ProgressVm) -> Element {
    let style = progress.fill_style();
    rsx! {
        div { class: "progress",
            div { class: "progress-bar",
                div { class: "progress-fill", style: "{style}" }
            }
            span { class: "progress-label", "{progress.summary()}" }
            if progress.unsaved {
                span { class: "progress-warning", "Progress could not be saved" }
            }
        }
    }
}

#[component]
pub fn MarkCompleteButton(
    section: NavSection,
    complete: bool,
    on_mark: EventHandler<NavSection>,
) -> Element {
    if complete {
        return rsx! {
            p { class: "section-done", "✓ {section.label()} complete" }
        };
    }
    rsx! {
        button {
            class: "btn btn-complete",
            "data-complete": section.as_str(),
            onclick: move |_| on_mark.call(section),
            "Mark section complete"
        }
    }
}
