use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use primer_core::ContentRegistry;
use services::{CodeRunner, ProgressService};
use storage::repository::{ProgressRepository, Storage};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::context::{UiApp, build_app_context};
use crate::views::{LearnView, LessonView, SectionView};

#[derive(Clone)]
struct TestApp {
    progress: Arc<ProgressService>,
    code_runner: Arc<CodeRunner>,
}

impl UiApp for TestApp {
    fn content(&self) -> &'static ContentRegistry {
        ContentRegistry::builtin()
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn code_runner(&self) -> Arc<CodeRunner> {
        Arc::clone(&self.code_runner)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Learn,
    Section(String),
    Lesson(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    navigation: Arc<Mutex<Option<UnboundedReceiver<ViewKind>>>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = use_signal(|| props.view.clone());
    use_context_provider(|| view);

    let navigation = Arc::clone(&props.navigation);
    use_hook(move || {
        let receiver = navigation.lock().ok().and_then(|mut slot| slot.take());
        if let Some(mut receiver) = receiver {
            spawn(async move {
                let mut view = view;
                while let Some(next) = receiver.recv().await {
                    view.set(next);
                }
            });
        }
    });

    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<Signal<ViewKind>>();
    match view() {
        ViewKind::Learn => rsx! { LearnView {} },
        ViewKind::Section(section) => rsx! { SectionView { section: section } },
        ViewKind::Lesson(lesson_id) => rsx! { LessonView { lesson_id: lesson_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressService>,
    navigate: UnboundedSender<ViewKind>,
}

impl ViewHarness {
    /// Swap the rendered view, as a route change would. Call `drive_async`
    /// afterwards to apply it.
    pub fn navigate(&self, view: ViewKind) {
        let _ = self.navigate.send(view);
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_progress_repo(view, Storage::in_memory().progress).await
}

pub async fn setup_view_harness_with_progress_repo(
    view: ViewKind,
    repo: Arc<dyn ProgressRepository>,
) -> ViewHarness {
    let progress = Arc::new(ProgressService::load(repo).await);
    let app = Arc::new(TestApp {
        progress: Arc::clone(&progress),
        code_runner: Arc::new(CodeRunner::new(Duration::from_millis(10))),
    });

    let (navigate, receiver) = unbounded_channel();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            navigation: Arc::new(Mutex::new(Some(receiver))),
        },
    );

    ViewHarness {
        dom,
        progress,
        navigate,
    }
}
