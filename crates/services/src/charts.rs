//! Chart datasets for the justice and beneficence sections.

use ethics_core::model::{
    ChartDataset, ChartKind, CycleStage, JusticeOutcome, LoopState, OutreachOutcome,
};

const UNDERSERVED: &str = "Underserved / Marginalized";
const WELL_REPRESENTED: &str = "Historically Well-Represented";

/// Cohort split for the strategy demo.
#[must_use]
pub fn strategy_composition(outcome: &JusticeOutcome) -> ChartDataset {
    composition(f64::from(outcome.current.value()))
}

/// Cohort split for the outreach slider.
#[must_use]
pub fn outreach_composition(outcome: &OutreachOutcome) -> ChartDataset {
    composition(outcome.diversity)
}

fn composition(underserved: f64) -> ChartDataset {
    ChartDataset::new("Resulting Dataset Composition", ChartKind::Pie)
        .with_entry(WELL_REPRESENTED, 100.0 - underserved)
        .with_entry(UNDERSERVED, underserved)
}

/// Progress of each stage of the data cycle.
#[must_use]
pub fn data_cycle(state: &LoopState) -> ChartDataset {
    CycleStage::ALL
        .into_iter()
        .fold(ChartDataset::new("The Data Cycle", ChartKind::Bar), |chart, stage| {
            chart.with_entry(stage.label(), f64::from(state.stage_progress(stage)))
        })
}
