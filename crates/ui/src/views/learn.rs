use std::sync::Arc;

use dioxus::prelude::*;
use primer_core::model::NavSection;
use services::Persistence;

use crate::context::AppContext;
use crate::vm::{FADE_IN_DURATION, Initializer, ProgressVm, SectionController, shortcut_target};

use super::exercises::ExercisesPane;
use super::interactive::InteractivePane;
use super::overview::OverviewPane;
use super::progress::{MarkCompleteButton, ProgressBar};
use super::reference::ReferencePane;
use super::visual::VisualPane;

#[component]
pub fn LearnView() -> Element {
    rsx! {
        LearnPage { initial: NavSection::Overview.as_str().to_string() }
    }
}

/// Deep link into one section, e.g. `/learn/interactive`.
///
/// Keyed by the section so a route change remounts the page on the new one.
#[component]
pub fn SectionView(section: String) -> Element {
    rsx! {
        LearnPage { key: "{section}", initial: section.clone() }
    }
}

fn schedule_fade_end(controller: Signal<SectionController>, generation: u64) {
    spawn(async move {
        let mut controller = controller;
        tokio::time::sleep(FADE_IN_DURATION).await;
        controller.write().end_fade(generation);
    });
}

#[component]
fn LearnPage(initial: String) -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(|| SectionController::new(&initial));
    let progress_service = ctx.progress();
    let progress = use_signal(|| ProgressVm::from_record(&progress_service.record()));

    use_hook(move || schedule_fade_end(controller, controller.peek().fade_generation()));

    let switch_to = use_callback(move |target: String| {
        let mut controller = controller;
        let switch = controller.write().switch_section(&target);
        schedule_fade_end(controller, switch.fade_generation);
    });

    let progress_service = ctx.progress();
    let mark_complete = use_callback(move |section: NavSection| {
        let service = Arc::clone(&progress_service);
        let mut progress = progress;
        spawn(async move {
            let update = service.mark_complete(section.as_str()).await;
            let unsaved = update.persistence == Persistence::MemoryOnly;
            progress.set(ProgressVm::from_record(&service.record()).with_unsaved(unsaved));
        });
    });

    let on_key = move |evt: KeyboardEvent| {
        let modifiers = evt.data.modifiers();
        let primary = modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META);
        if let Key::Character(value) = evt.data.key() {
            if let Some(section) = shortcut_target(primary, &value) {
                evt.prevent_default();
                switch_to.call(section.as_str().to_string());
            }
        }
    };

    let state = controller.read().clone();
    let progress_vm = progress();
    let pane_class = |section: NavSection| state.pane_class(section.as_str());

    rsx! {
        div { class: "learn", tabindex: "0", autofocus: true, onkeydown: on_key,
            ProgressBar { progress: progress_vm.clone() }

            nav { class: "nav",
                for section in NavSection::ALL {
                    button {
                        key: "{section}",
                        class: state.trigger_class(section.as_str()),
                        "data-section": section.as_str(),
                        "data-tooltip": NavSection::TOOLTIP,
                        title: NavSection::TOOLTIP,
                        onclick: move |_| switch_to.call(section.as_str().to_string()),
                        "{section.label()}"
                    }
                }
            }

            section { id: "overview", class: pane_class(NavSection::Overview),
                OverviewPane { progress: progress_vm.clone() }
                MarkCompleteButton {
                    section: NavSection::Overview,
                    complete: progress_vm.is_complete(NavSection::Overview),
                    on_mark: mark_complete,
                }
            }
            section { id: "visual", class: pane_class(NavSection::Visual),
                VisualPane { initialized: state.is_initialized(Initializer::VisualComponents) }
                MarkCompleteButton {
                    section: NavSection::Visual,
                    complete: progress_vm.is_complete(NavSection::Visual),
                    on_mark: mark_complete,
                }
            }
            section { id: "interactive", class: pane_class(NavSection::Interactive),
                InteractivePane { initialized: state.is_initialized(Initializer::CodeEditor) }
                MarkCompleteButton {
                    section: NavSection::Interactive,
                    complete: progress_vm.is_complete(NavSection::Interactive),
                    on_mark: mark_complete,
                }
            }
            section { id: "exercises", class: pane_class(NavSection::Exercises),
                ExercisesPane { initialized: state.is_initialized(Initializer::Exercises) }
                MarkCompleteButton {
                    section: NavSection::Exercises,
                    complete: progress_vm.is_complete(NavSection::Exercises),
                    on_mark: mark_complete,
                }
            }
            section { id: "reference", class: pane_class(NavSection::Reference),
                ReferencePane { initialized: state.is_initialized(Initializer::Reference) }
                MarkCompleteButton {
                    section: NavSection::Reference,
                    complete: progress_vm.is_complete(NavSection::Reference),
                    on_mark: mark_complete,
                }
            }
        }
    }
}
