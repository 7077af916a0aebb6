use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{REFERENCE_SLOTS, map_references};

#[component]
pub fn ReferencePane(initialized: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let items = if initialized {
        map_references(ctx.content(), REFERENCE_SLOTS)
    } else {
        Vec::new()
    };

    rsx! {
        h2 { "Quick Reference" }
        div { class: "reference-grid",
            for item in items {
                div {
                    key: "{item.id}",
                    class: "reference-card {item.category}",
                    "data-placeholder": "{item.id}",
                    h3 { "{item.title}" }
                    div { class: "reference-body", dangerous_inner_html: "{item.content_html}" }
                    for (index, example) in item.examples_html.iter().enumerate() {
                        div { key: "{index}", class: "reference-example", dangerous_inner_html: "{example}" }
                    }
                }
            }
        }
    }
}
