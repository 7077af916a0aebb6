use std::sync::Arc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{EXAMPLE_SLOTS, EditorVm, ExampleVm, code_block_html, map_examples};

#[component]
pub fn InteractivePane(initialized: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let editor = use_signal(EditorVm::default);
    let examples = map_examples(ctx.content(), EXAMPLE_SLOTS);

    let runner = ctx.code_runner();
    let run = use_callback(move |()| {
        let runner = Arc::clone(&runner);
        let mut editor = editor;
        let ticket = editor.write().start_run(&runner);
        spawn(async move {
            // A newer run, a reset or a loaded example makes this one finish with None.
            let result = runner.finish(ticket).await;
            editor.write().finish_run(result);
        });
    });

    let runner = ctx.code_runner();
    let reset = use_callback(move |()| {
        let mut editor = editor;
        editor.write().reset(&runner);
    });

    let runner = ctx.code_runner();
    let load_example = use_callback(move |snippet: String| {
        let mut editor = editor;
        editor.write().load_example(&runner, snippet);
    });

    rsx! {
        h2 { "Interactive Code" }
        p { class: "lead", "Edit the program and run it. Ctrl+Enter runs from inside the editor." }
        if initialized {
            CodeEditor { editor: editor, on_run: run, on_reset: reset }
        } else {
            div { class: "editor-placeholder", "The editor loads when this section opens." }
        }
        if !examples.is_empty() {
            h3 { "Examples" }
            div { class: "example-list",
                for example in examples {
                    ExampleCard {
                        key: "{example.id}",
                        example: example,
                        enabled: initialized,
                        on_load: load_example,
                    }
                }
            }
        }
    }
}

#[component]
fn ExampleCard(example: ExampleVm, enabled: bool, on_load: Callback<String>) -> Element {
    let snippet = example.code.clone();
    rsx! {
        div { class: "example",
            h4 { "{example.title}" }
            if let Some(expected) = example.expected_output.clone() {
                p { class: "expected", "Prints: " code { "{expected}" } }
            }
            button {
                class: "btn btn-secondary",
                disabled: !enabled,
                onclick: move |_| on_load.call(snippet.clone()),
                "Load example"
            }
        }
    }
}

#[component]
fn CodeEditor(editor: Signal<EditorVm>, on_run: Callback<()>, on_reset: Callback<()>) -> Element {
    let state = editor.read().clone();
    let preview = code_block_html(state.code(), "rust");

    rsx! {
        div { class: "editor",
            textarea {
                id: "code-editor",
                class: "code-editor",
                spellcheck: "false",
                rows: "10",
                value: "{state.code()}",
                oninput: move |evt| {
                    let mut editor = editor;
                    editor.write().edit(evt.value());
                },
                onkeydown: move |evt: KeyboardEvent| {
                    let modifiers = evt.data.modifiers();
                    let primary = modifiers.contains(Modifiers::CONTROL)
                        || modifiers.contains(Modifiers::META);
                    if primary && evt.data.key() == Key::Enter {
                        evt.prevent_default();
                        on_run.call(());
                    }
                },
            }
            div { class: "editor-actions",
                button { id: "run-code", class: "btn btn-primary", onclick: move |_| on_run.call(()), "▶ Run Code" }
                button { id: "reset-code", class: "btn btn-secondary", onclick: move |_| on_reset.call(()), "↺ Reset" }
            }
            div { class: "code-preview", dangerous_inner_html: "{preview}" }
            pre { id: "code-output", class: "code-output", "{state.output()}" }
        }
    }
}
