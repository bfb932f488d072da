use dioxus::prelude::*;
use ethics_core::model::{AutonomyLevel, OutreachStatus, Percent};
use services::{LayerOption, SectionWidget, SessionAction, StageProgress, StrategyOption};

use crate::views::ViewError;

#[component]
pub(super) fn SectionWidgetView(
    widget: SectionWidget,
    on_action: Callback<SessionAction>,
    on_error: Callback<ViewError>,
) -> Element {
    match widget {
        SectionWidget::None => rsx! {},
        SectionWidget::Autonomy { options, selected } => rsx! {
            AutonomyWidget { options, selected, on_action }
        },
        SectionWidget::Strategies {
            options,
            goal,
            current,
            pass,
        } => rsx! {
            StrategyWidget { options, goal, current, pass, on_action, on_error }
        },
        SectionWidget::Outreach {
            effort,
            step,
            diversity,
            status,
        } => rsx! {
            OutreachWidget { effort, step, diversity, status, on_action, on_error }
        },
        SectionWidget::Privacy {
            layers,
            score,
            tier: _,
        } => rsx! {
            PrivacyWidget { layers, score, on_action }
        },
        SectionWidget::Beneficence { closed, stages } => rsx! {
            BeneficenceWidget { closed, stages, on_action }
        },
    }
}

#[component]
fn AutonomyWidget(
    options: Vec<AutonomyLevel>,
    selected: Option<AutonomyLevel>,
    on_action: Callback<SessionAction>,
) -> Element {
    rsx! {
        fieldset { class: "widget widget--autonomy",
            legend { "Choose Communication Style:" }
            div { class: "style-scale",
                for level in options {
                    label { key: "{level}", class: "style-scale__option",
                        input {
                            r#type: "radio",
                            name: "consent-style",
                            value: "{level}",
                            checked: selected == Some(level),
                            onchange: move |_| on_action.call(SessionAction::SetAutonomyLevel(level)),
                        }
                        span { "{level.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StrategyWidget(
    options: Vec<StrategyOption>,
    goal: Percent,
    current: Percent,
    pass: bool,
    on_action: Callback<SessionAction>,
    on_error: Callback<ViewError>,
) -> Element {
    rsx! {
        fieldset { class: "widget widget--strategies",
            legend { "Recruitment Strategies" }
            {options.into_iter().map(|option| {
                let key = option.key.clone();
                rsx! {
                    label { key: "{option.key}", class: "strategy", title: "{option.help}",
                        input {
                            r#type: "checkbox",
                            checked: option.enabled,
                            onchange: move |evt: FormEvent| {
                                on_action.call(SessionAction::SetStrategy {
                                    key: key.clone(),
                                    enabled: evt.checked(),
                                });
                            },
                        }
                        span { "{option.label} (+{option.weight})" }
                    }
                }
            })}
            label { class: "goal-input",
                span { "Representation goal: {goal}" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "1",
                    value: "{goal.value()}",
                    oninput: move |evt: FormEvent| match evt.value().trim().parse::<u32>() {
                        Ok(goal) => on_action.call(SessionAction::SetJusticeGoal(goal)),
                        Err(_) => on_error.call(ViewError::Rejected),
                    },
                }
            }
            p { class: if pass { "justice-readout justice-readout--pass" } else { "justice-readout" },
                "Underrepresented share: {current} (goal {goal})"
            }
        }
    }
}

#[component]
fn OutreachWidget(
    effort: u8,
    step: u8,
    diversity: f64,
    status: OutreachStatus,
    on_action: Callback<SessionAction>,
    on_error: Callback<ViewError>,
) -> Element {
    let status_label = match status {
        OutreachStatus::Homogeneous => "Homogeneous",
        OutreachStatus::Representative => "Representative",
    };
    let diversity_label = format!("{diversity:.0}%");
    rsx! {
        fieldset { class: "widget widget--outreach",
            legend { "Community Engagement Effort (%)" }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                step: "{step}",
                value: "{effort}",
                title: "Higher effort includes: Hiring translators, holding town halls, and partnering with community leaders.",
                oninput: move |evt: FormEvent| match evt.value().trim().parse::<u32>() {
                    Ok(effort) => on_action.call(SessionAction::SetOutreachEffort(effort)),
                    Err(_) => on_error.call(ViewError::Rejected),
                },
            }
            p {
                strong { "Current Investment:" }
                " {effort}%"
            }
            p { class: "outreach-readout", "Underrepresented share: {diversity_label} ({status_label})" }
        }
    }
}

#[component]
fn PrivacyWidget(layers: Vec<LayerOption>, score: u8, on_action: Callback<SessionAction>) -> Element {
    rsx! {
        fieldset { class: "widget widget--privacy",
            legend { "Security Protocols" }
            for option in layers {
                label { key: "{option.layer.index()}", class: "layer", title: "{option.layer.help()}",
                    input {
                        r#type: "checkbox",
                        checked: option.enabled,
                        onchange: move |evt: FormEvent| {
                            on_action.call(SessionAction::SetSecurityLayer {
                                layer: option.layer,
                                enabled: evt.checked(),
                            });
                        },
                    }
                    span { "{option.layer.label()}" }
                }
            }
            p { class: "privacy-score", "Security Score: {score}/4" }
        }
    }
}

#[component]
fn BeneficenceWidget(
    closed: bool,
    stages: Vec<StageProgress>,
    on_action: Callback<SessionAction>,
) -> Element {
    rsx! {
        div { class: "widget widget--beneficence",
            ol { class: "cycle",
                for progress in stages {
                    li {
                        key: "{progress.stage.label()}",
                        class: if progress.percent == 100 { "cycle__stage cycle__stage--done" } else { "cycle__stage" },
                        "{progress.stage.label()}"
                    }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_action.call(SessionAction::ToggleBeneficenceLoop),
                if closed { "Reopen the Loop" } else { "Close the Loop" }
            }
        }
    }
}
