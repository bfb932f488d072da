use dioxus::prelude::*;
use ethics_core::model::ChartKind;
use services::SessionAction;

use crate::views::ViewError;
use crate::vm::{BlockVm, ChartVm, NavItemVm, TrackOptionVm};

#[component]
pub(super) fn SectionNav(items: Vec<NavItemVm>, on_action: Callback<SessionAction>) -> Element {
    rsx! {
        nav { class: "section-nav",
            h3 { class: "section-nav__title", "Go to Section" }
            {items.into_iter().map(|item| {
                let section = item.section;
                rsx! {
                    label {
                        key: "{section}",
                        class: if item.active {
                            "section-nav__item section-nav__item--active"
                        } else {
                            "section-nav__item"
                        },
                        input {
                            r#type: "radio",
                            name: "section",
                            value: "{section}",
                            checked: item.active,
                            onchange: move |_| on_action.call(SessionAction::SelectSection(section)),
                        }
                        span { "{item.label}" }
                    }
                }
            })}
        }
    }
}

#[component]
pub(super) fn TrackPicker(options: Vec<TrackOptionVm>, on_action: Callback<SessionAction>) -> Element {
    rsx! {
        div { class: "track-picker",
            h3 { class: "track-picker__title", "Select Context:" }
            {options.into_iter().map(|option| {
                let track = option.track;
                rsx! {
                    label { key: "{track}", class: "track-picker__option",
                        input {
                            r#type: "radio",
                            name: "track",
                            value: "{track}",
                            checked: option.active,
                            onchange: move |_| on_action.call(SessionAction::SelectTrack(track)),
                        }
                        span { "{option.label}" }
                    }
                }
            })}
        }
    }
}

#[component]
pub(super) fn BlockCard(block: BlockVm) -> Element {
    rsx! {
        div { class: block.class,
            if let Some(heading) = &block.heading {
                h4 { class: "block__heading", "{heading}" }
            }
            div { class: "block__body", dangerous_inner_html: "{block.body_html}" }
        }
    }
}

#[component]
pub(super) fn ChartView(chart: ChartVm) -> Element {
    rsx! {
        figure { class: "chart",
            figcaption { class: "chart__title", "{chart.title}" }
            match chart.kind {
                ChartKind::Pie => rsx! {
                    div { class: "chart__pie", style: chart.pie_style.clone().unwrap_or_default() }
                    ul { class: "chart__legend",
                        for entry in chart.entries.iter() {
                            li { key: "{entry.label}",
                                span { class: "chart__swatch", style: "background: {entry.color};" }
                                "{entry.label}: {entry.percent_label}"
                            }
                        }
                    }
                },
                ChartKind::Bar => rsx! {
                    div { class: "chart__bars",
                        for entry in chart.entries.iter() {
                            div { key: "{entry.label}", class: "chart__row",
                                span { class: "chart__label", "{entry.label}" }
                                div { class: "chart__track",
                                    div { class: "chart__bar", style: "{entry.bar_style}" }
                                }
                                span { class: "chart__value", "{entry.percent_label}" }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub(super) fn ErrorBanner(error: ViewError, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert",
            p { "{error.message()}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}
