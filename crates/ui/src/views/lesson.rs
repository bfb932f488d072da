use dioxus::prelude::*;
use ethics_core::model::LessonSession;
use services::{LessonService, SessionAction};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::components::{BlockCard, ChartView, ErrorBanner, SectionNav, TrackPicker};
use crate::views::widgets::SectionWidgetView;
use crate::vm::{LessonVm, SectionPageVm, map_lesson};

/// The learner's session plus the last rejected input, owned by this window.
struct LessonState {
    session: LessonSession,
    error: Option<ViewError>,
}

impl LessonState {
    fn start(ctx: &AppContext) -> Self {
        let service = ctx.lesson_service();
        let mut session = service.start_session();
        session.select_track(ctx.initial_track());
        let error = service
            .apply(&mut session, SessionAction::SelectSection(ctx.initial_section()))
            .err()
            .map(ViewError::from);
        Self { session, error }
    }
}

/// Session signal plus the callbacks the lesson screen wires into its widgets.
#[derive(Clone, Copy)]
pub(crate) struct LessonHandle {
    state: Signal<LessonState>,
    pub(crate) dispatch: Callback<SessionAction>,
    on_error: Callback<ViewError>,
    on_dismiss: Callback<()>,
}

pub(crate) fn use_lesson() -> LessonHandle {
    let ctx = use_context::<AppContext>();
    let mut state = use_signal(|| LessonState::start(&ctx));

    let service = ctx.lesson_service();
    let dispatch = use_callback(move |action: SessionAction| {
        let mut state = state.write();
        let result = service.apply(&mut state.session, action);
        state.error = result.err().map(ViewError::from);
    });
    let on_error = use_callback(move |error: ViewError| state.write().error = Some(error));
    let on_dismiss = use_callback(move |()| state.write().error = None);

    LessonHandle {
        state,
        dispatch,
        on_error,
        on_dismiss,
    }
}

#[component]
pub fn LessonView() -> Element {
    let lesson = use_lesson();
    let service = use_context::<AppContext>().lesson_service();
    render_lesson(&service, lesson)
}

pub(crate) fn render_lesson(service: &LessonService, lesson: LessonHandle) -> Element {
    let LessonHandle {
        state,
        dispatch,
        on_error,
        on_dismiss,
    } = lesson;
    let (vm, error) = {
        let state = state.read();
        (map_lesson(service, &state.session), state.error)
    };

    match vm {
        Ok(LessonVm {
            title,
            nav,
            tracks,
            page,
        }) => rsx! {
            div { class: "lesson",
                aside { class: "lesson-sidebar",
                    h1 { class: "lesson-sidebar__title", "{title}" }
                    TrackPicker { options: tracks, on_action: dispatch }
                    SectionNav { items: nav, on_action: dispatch }
                }
                main { class: "lesson-page",
                    if let Some(error) = error {
                        ErrorBanner { error, on_dismiss }
                    }
                    SectionPage { page, on_action: dispatch, on_error }
                }
            }
        },
        Err(err) => rsx! {
            div { class: "lesson lesson--error",
                h2 { "Lesson unavailable" }
                p { "{err.message()}" }
            }
        },
    }
}

#[component]
fn SectionPage(
    page: SectionPageVm,
    on_action: Callback<SessionAction>,
    on_error: Callback<ViewError>,
) -> Element {
    rsx! {
        section { class: "section-page", id: "section-{page.section}",
            h2 { class: "section-page__title", "{page.title}" }
            div { class: "narrator", dangerous_inner_html: "{page.narrator_html}" }
            if let Some(instruction) = &page.instruction_html {
                div { class: "instruction", dangerous_inner_html: "{instruction}" }
            }
            for (idx, block) in page.blocks.iter().enumerate() {
                BlockCard { key: "{idx}", block: block.clone() }
            }
            SectionWidgetView { widget: page.widget.clone(), on_action, on_error }
            if let Some(outcome) = &page.outcome {
                BlockCard { block: outcome.clone() }
            }
            if let Some(chart) = &page.chart {
                ChartView { chart: chart.clone() }
            }
            p { class: "dataset-link",
                "Example dataset: "
                a { href: "{page.dataset_url}", target: "_blank", rel: "noopener noreferrer", "{page.dataset_name}" }
            }
        }
    }
}
