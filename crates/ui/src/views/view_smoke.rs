use ethics_core::model::{Section, SecurityLayer, Track, VariantKind};
use services::SessionAction;

use super::test_harness::{render_section, setup_view_harness};

#[test]
fn intro_smoke_renders_pillars_and_nav() {
    let html = render_section(VariantKind::Workshop, Track::Clinical, Section::Intro);
    assert!(html.contains("Ethical Data Acquisition Workshop"), "missing title in {html}");
    assert!(html.contains("Intro: The Four Pillars"), "missing nav in {html}");
    assert!(html.contains("1. Autonomy"), "missing pillar card in {html}");
    assert!(html.contains("MIMIC-IV Clinical Database"), "missing dataset in {html}");
    assert!(!html.contains("Demo Summary"), "workshop should not list summary in {html}");
}

#[test]
fn autonomy_smoke_renders_prompt_before_selection() {
    let html = render_section(VariantKind::Guided, Track::Clinical, Section::Autonomy);
    assert!(html.contains("Choose Communication Style:"), "missing widget in {html}");
    assert!(html.contains("Select a communication style"), "missing prompt in {html}");
    assert!(html.contains("Empowered Dialogue"), "missing level label in {html}");
}

#[test]
fn briefing_autonomy_offers_two_styles() {
    let html = render_section(VariantKind::Briefing, Track::Clinical, Section::Autonomy);
    assert!(html.contains("Standard Legalese"), "missing jargon in {html}");
    assert!(html.contains("Empowered Dialogue"), "missing empowered in {html}");
    assert!(!html.contains("Simplified Language"), "unexpected level in {html}");
}

#[test]
fn justice_smoke_renders_strategies_and_chart() {
    let html = render_section(VariantKind::Workshop, Track::BasicScience, Section::Justice);
    assert!(html.contains("Community Liaison"), "missing strategy in {html}");
    assert!(html.contains("Underrepresented share: 5% (goal 30%)"), "missing readout in {html}");
    assert!(html.contains("Goal not met"), "missing outcome in {html}");
    assert!(html.contains("conic-gradient"), "missing pie chart in {html}");
    assert!(html.contains("type=\"range\""), "goal should be a slider in {html}");
    assert!(html.contains("Representation goal: 30%"), "missing goal label in {html}");
    assert!(html.contains("donors of African and Indigenous ancestry"), "missing track copy in {html}");
}

#[test]
fn guided_justice_smoke_renders_outreach_slider() {
    let html = render_section(VariantKind::Guided, Track::Clinical, Section::Justice);
    assert!(html.contains("Community Engagement Effort"), "missing slider in {html}");
    assert!(html.contains("Underrepresented share: 14%"), "missing diversity in {html}");
    assert!(html.contains("homogenous"), "missing status in {html}");
}

#[test]
fn privacy_smoke_renders_at_risk_by_default() {
    let html = render_section(VariantKind::Workshop, Track::Clinical, Section::Privacy);
    assert!(html.contains("Security Score: 0/4"), "missing score in {html}");
    assert!(html.contains("AT RISK"), "missing tier in {html}");
    assert!(html.contains("End-to-End Encryption"), "missing layer in {html}");
}

#[test]
fn beneficence_smoke_renders_open_loop() {
    let html = render_section(VariantKind::Guided, Track::BasicScience, Section::Beneficence);
    assert!(html.contains("Close the Loop"), "missing button in {html}");
    assert!(html.contains("The Void (Current State)"), "missing open-loop block in {html}");
    assert!(html.contains("The Data Cycle"), "missing cycle chart in {html}");
}

#[test]
fn disabled_launch_section_shows_error_banner() {
    let html = render_section(VariantKind::Workshop, Track::Clinical, Section::Summary);
    assert!(html.contains("available in this lesson"), "missing error in {html}");
    assert!(html.contains("Dismiss"), "missing dismiss in {html}");
    assert!(html.contains("Ethically Sourced Biomedical Data"), "missing intro fallback in {html}");
}

#[test]
fn privacy_layers_dispatch_to_secure_then_bad_goal_shows_banner() {
    let mut harness = setup_view_harness(VariantKind::Workshop, Track::Clinical, Section::Privacy);
    harness.rebuild();

    for layer in SecurityLayer::ALL {
        harness.act(SessionAction::SetSecurityLayer {
            layer,
            enabled: true,
        });
    }
    let html = harness.render();
    assert!(html.contains("Security Score: 4/4"), "missing full score in {html}");
    assert!(html.contains("SECURE"), "missing secure tier in {html}");
    assert!(!html.contains("AT RISK"), "stale tier in {html}");
    assert!(!html.contains("Dismiss"), "unexpected banner in {html}");

    harness.act(SessionAction::SetJusticeGoal(101));
    let html = harness.render();
    assert!(html.contains("available in this lesson"), "missing banner in {html}");
    assert!(html.contains("Security Score: 4/4"), "rejected input changed state in {html}");

    harness.act(SessionAction::SetSecurityLayer {
        layer: SecurityLayer::ALL[0],
        enabled: false,
    });
    let html = harness.render();
    assert!(!html.contains("Dismiss"), "banner should clear on valid input in {html}");
    assert!(html.contains("Security Score: 3/4"), "missing updated score in {html}");
}

#[test]
fn strategy_toggles_update_readout_and_outcome() {
    let mut harness =
        setup_view_harness(VariantKind::Workshop, Track::Clinical, Section::Justice);
    harness.rebuild();

    for key in ["liaison", "logistics"] {
        harness.act(SessionAction::SetStrategy {
            key: key.to_string(),
            enabled: true,
        });
    }
    let html = harness.render();
    assert!(html.contains("Underrepresented share: 25% (goal 30%)"), "missing readout in {html}");
    assert!(html.contains("Goal not met"), "missing fail outcome in {html}");

    harness.act(SessionAction::SetJusticeGoal(25));
    let html = harness.render();
    assert!(html.contains("Underrepresented share: 25% (goal 25%)"), "missing readout in {html}");
    assert!(html.contains("Goal met"), "missing pass outcome in {html}");
}
