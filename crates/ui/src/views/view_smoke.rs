use std::sync::Arc;

use primer_core::model::{NavSection, ProgressRecord};
use storage::repository::Storage;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_progress_repo,
};

/// Opening tags named `tag`, without the leading `<`.
fn opening_tags<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let needle = format!("<{tag} ");
    html.match_indices(&needle)
        .filter_map(|(start, _)| {
            let rest = &html[start + 1..];
            rest.find('>').map(|end| &rest[..end])
        })
        .collect()
}

fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

fn has_class(tag: &str, class: &str) -> bool {
    attr(tag, "class").is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

fn active_triggers(html: &str) -> Vec<String> {
    opening_tags(html, "button")
        .into_iter()
        .filter(|tag| has_class(tag, "nav-btn") && has_class(tag, "active"))
        .filter_map(|tag| attr(tag, "data-section").map(str::to_string))
        .collect()
}

fn active_panes(html: &str) -> Vec<String> {
    opening_tags(html, "section")
        .into_iter()
        .filter(|tag| has_class(tag, "section") && has_class(tag, "active"))
        .filter_map(|tag| attr(tag, "id").map(str::to_string))
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_starts_on_overview() {
    let mut harness = setup_view_harness(ViewKind::Learn).await;
    harness.rebuild();
    let html = harness.render();

    let triggers: Vec<&str> = opening_tags(&html, "button")
        .into_iter()
        .filter(|tag| has_class(tag, "nav-btn"))
        .collect();
    assert_eq!(triggers.len(), 5, "{html}");
    for tag in &triggers {
        assert_eq!(attr(tag, "data-tooltip"), Some(NavSection::TOOLTIP));
        assert!(has_class(tag, "tooltip"));
    }

    assert_eq!(active_triggers(&html), vec!["overview"]);
    assert_eq!(active_panes(&html), vec!["overview"]);
    assert_eq!(opening_tags(&html, "section").len(), 5);
}

#[tokio::test(flavor = "current_thread")]
async fn each_section_activates_exactly_its_trigger_and_pane() {
    for section in NavSection::ALL {
        let mut harness =
            setup_view_harness(ViewKind::Section(section.as_str().to_string())).await;
        harness.rebuild();
        let html = harness.render();
        assert_eq!(active_triggers(&html), vec![section.as_str()], "{section}");
        assert_eq!(active_panes(&html), vec![section.as_str()], "{section}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_section_activates_nothing() {
    let mut harness = setup_view_harness(ViewKind::Section("settings".to_string())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(active_triggers(&html).is_empty(), "{html}");
    assert!(active_panes(&html).is_empty(), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn every_progress_fill_uses_saved_percentage() {
    let storage = Storage::in_memory();
    let mut record = ProgressRecord::default();
    record.mark_complete("overview");
    record.mark_complete("visual");
    storage.progress.save_progress(&record).await.unwrap();

    let mut harness =
        setup_view_harness_with_progress_repo(ViewKind::Learn, Arc::clone(&storage.progress))
            .await;
    harness.rebuild();
    let html = harness.render();

    let fills: Vec<&str> = opening_tags(&html, "div")
        .into_iter()
        .filter(|tag| has_class(tag, "progress-fill"))
        .collect();
    assert!(fills.len() >= 2, "{html}");
    for fill in fills {
        assert_eq!(attr(fill, "style"), Some("width: 40%"), "{fill}");
    }
    assert!(html.contains("2 of 5 sections complete"), "{html}");
    assert!(html.contains("Visual Learning complete"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn panes_stay_empty_until_their_section_opens() {
    let mut harness = setup_view_harness(ViewKind::Learn).await;
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("data-placeholder=\"memory-diagram\""), "{html}");
    assert!(!html.contains("id=\"code-editor\""), "{html}");
    assert!(html.contains("The editor loads when this section opens."), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn interactive_section_shows_editor_and_output() {
    let mut harness = setup_view_harness(ViewKind::Section("interactive".to_string())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("id=\"code-editor\""), "{html}");
    assert!(html.contains("id=\"code-output\""), "{html}");
    assert!(html.contains("Run Code"), "{html}");
    assert!(html.contains("<span class=\"token macro\">println!</span>"), "{html}");
    assert!(html.contains("Load example"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn visual_section_renders_diagrams() {
    let mut harness = setup_view_harness(ViewKind::Section("visual".to_string())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("data-placeholder=\"memory-diagram\""), "{html}");
    assert!(html.contains("data-placeholder=\"ownership-transfer\""), "{html}");
    assert!(html.contains("Stack Memory"), "{html}");
    assert!(html.contains("Heap Memory"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exercises_hide_hints_until_asked() {
    let mut harness = setup_view_harness(ViewKind::Section("exercises".to_string())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Challenge: Fix the Variables"), "{html}");
    assert!(html.contains("Show hint"), "{html}");
    assert!(html.contains("Show answer"), "{html}");
    assert!(!html.contains("Use the mut keyword!"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reference_renders_markdown_and_examples() {
    let mut harness = setup_view_harness(ViewKind::Section("reference".to_string())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("<h4>Variables</h4>"), "{html}");
    assert!(html.contains("<strong>E0382:</strong>"), "{html}");
    assert!(html.contains("reference-example"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn overview_lists_lessons_and_unwritten_path_steps() {
    let mut harness = setup_view_harness(ViewKind::Learn).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("lesson-card"), "{html}");
    assert!(html.contains("smart-pointers (coming soon)"), "{html}");
    assert!(html.contains("0 of 5 sections complete"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_shows_sections_and_prerequisites() {
    let mut harness = setup_view_harness(ViewKind::Lesson("common-concepts".to_string())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Chapter 2"), "{html}");
    assert!(html.contains("Before you start"), "{html}");
    assert!(html.contains("lesson-section"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_lesson_is_reported() {
    let mut harness = setup_view_harness(ViewKind::Lesson("nope".to_string())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Lesson not found"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn marking_progress_is_visible_after_rerender() {
    let mut harness = setup_view_harness(ViewKind::Learn).await;
    harness.progress.mark_complete("reference").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("width: 20%"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn changing_section_route_follows_the_new_section() {
    let mut harness = setup_view_harness(ViewKind::Section("visual".to_string())).await;
    harness.rebuild();
    assert_eq!(active_panes(&harness.render()), vec!["visual".to_string()]);

    harness.navigate(ViewKind::Section("exercises".to_string()));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(active_panes(&html), vec!["exercises".to_string()], "{html}");
    assert_eq!(active_triggers(&html), vec!["exercises".to_string()], "{html}");
    assert!(html.contains("Challenge: Fix the Variables"), "{html}");
}
