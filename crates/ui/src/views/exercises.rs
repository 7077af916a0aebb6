use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{EXERCISE_SLOTS, ExerciseVm, map_exercises};

#[component]
pub fn ExercisesPane(initialized: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let exercises = if initialized {
        map_exercises(ctx.content(), EXERCISE_SLOTS)
    } else {
        Vec::new()
    };

    rsx! {
        h2 { "Exercises" }
        p { class: "lead", "Small challenges. Try them before peeking." }
        div { class: "exercise-list",
            for exercise in exercises {
                ExerciseCard { key: "{exercise.id}", exercise: exercise }
            }
        }
    }
}

#[component]
fn ExerciseCard(exercise: ExerciseVm) -> Element {
    let mut show_hint = use_signal(|| false);
    let mut show_solution = use_signal(|| false);

    rsx! {
        div { class: "exercise-placeholder", "data-placeholder": "{exercise.id}",
            div { class: "exercise-header",
                h3 { "{exercise.title}" }
                span { class: "difficulty", "{exercise.difficulty}" }
            }
            p { "{exercise.description}" }
            if let Some(code) = exercise.code_html.clone() {
                div { class: "exercise-code", dangerous_inner_html: "{code}" }
            }
            div { class: "exercise-actions",
                if exercise.hint.is_some() {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| show_hint.toggle(),
                        if show_hint() { "Hide hint" } else { "Show hint" }
                    }
                }
                if exercise.solution_html.is_some() {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| show_solution.toggle(),
                        if show_solution() { "Hide answer" } else { "Show answer" }
                    }
                }
            }
            if show_hint() {
                if let Some(hint) = exercise.hint.clone() {
                    p { class: "hint", "💡 {hint}" }
                }
            }
            if show_solution() {
                if let Some(solution) = exercise.solution_html.clone() {
                    div { class: "solution", dangerous_inner_html: "{solution}" }
                }
            }
        }
    }
}
