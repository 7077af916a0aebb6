use dioxus::prelude::*;
use primer_core::model::{Diagram, MemorySlot};

use crate::context::AppContext;
use crate::vm::{VISUAL_SLOTS, VisualVm, map_visuals};

#[component]
pub fn VisualPane(initialized: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let modules = if initialized {
        map_visuals(ctx.content(), VISUAL_SLOTS)
    } else {
        Vec::new()
    };

    rsx! {
        h2 { "Visual Learning" }
        p { class: "lead", "See what your code does to memory." }
        div { class: "visual-grid",
            for module in modules {
                VisualCard { key: "{module.id}", module: module }
            }
        }
    }
}

#[component]
fn VisualCard(module: VisualVm) -> Element {
    rsx! {
        div { class: "visual-placeholder", "data-placeholder": "{module.id}",
            h3 { "{module.title}" }
            p { "{module.description}" }
            {match &module.diagram {
                Diagram::Memory { stack, heap } => rsx! {
                    div { class: "memory-diagram",
                        MemoryFrame { title: "Stack Memory", variant: "stack", slots: stack.clone() }
                        MemoryFrame { title: "Heap Memory", variant: "heap", slots: heap.clone() }
                    }
                },
                Diagram::Move { from, to, type_name, caption } => rsx! {
                    div { class: "ownership-diagram",
                        div { class: "owner", code { "{from}" } }
                        div { class: "move-arrow", "→ {type_name} →" }
                        div { class: "owner", code { "{to}" } }
                        p { class: "caption", "{caption}" }
                    }
                },
            }}
        }
    }
}

#[component]
fn MemoryFrame(title: &'static str, variant: &'static str, slots: Vec<MemorySlot>) -> Element {
    rsx! {
        div { class: "memory-frame {variant}",
            h4 { "{title}" }
            for slot in slots {
                div { class: "memory-slot",
                    code { "{slot.code}" }
                    " → {slot.effect}"
                }
            }
        }
    }
}
