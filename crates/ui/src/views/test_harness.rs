use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use ethics_core::model::{Section, Track, VariantKind};
use services::{LessonService, SessionAction};

use crate::context::{UiApp, build_app_context};
use crate::views::lesson::{render_lesson, use_lesson};

#[derive(Clone)]
struct TestApp {
    lesson_service: Arc<LessonService>,
    track: Track,
    section: Section,
}

impl UiApp for TestApp {
    fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }

    fn initial_track(&self) -> Track {
        self.track
    }

    fn initial_section(&self) -> Section {
        self.section
    }
}

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionAction>>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<SessionAction> {
        self.dispatch
            .borrow()
            .clone()
            .expect("dispatch registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn LessonHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { LessonIntentHarness { app: props.app.clone(), handles: props.handles.clone() } }
}

#[component]
fn LessonIntentHarness(props: ViewHarnessProps) -> Element {
    let lesson = use_lesson();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(lesson.dispatch);
    }
    render_lesson(&props.app.lesson_service, lesson)
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&self) -> Callback<SessionAction> {
        self.handles.dispatch()
    }

    /// Send one learner action through the view and let it re-render.
    pub fn act(&mut self, action: SessionAction) {
        self.dispatch().call(action);
        drive_dom(&mut self.dom);
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

pub fn setup_view_harness(variant: VariantKind, track: Track, section: Section) -> ViewHarness {
    let lesson_service = Arc::new(LessonService::builtin(variant).expect("valid preset"));
    let app = Arc::new(TestApp {
        lesson_service,
        track,
        section,
    });
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        LessonHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

/// Build, render once and return the HTML.
pub fn render_section(variant: VariantKind, track: Track, section: Section) -> String {
    let mut harness = setup_view_harness(variant, track, section);
    harness.rebuild();
    harness.render()
}
