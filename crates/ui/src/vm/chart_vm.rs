use std::fmt::Write as _;

use ethics_core::model::{ChartDataset, ChartKind};

const PALETTE: [&str; 4] = ["#BDC3C7", "#27AE60", "#2980B9", "#8E44AD"];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartVm {
    pub title: String,
    pub kind: ChartKind,
    pub entries: Vec<ChartEntryVm>,
    /// `conic-gradient` background for pie charts.
    pub pie_style: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartEntryVm {
    pub label: String,
    pub percent_label: String,
    pub color: &'static str,
    pub bar_style: String,
}

#[must_use]
pub fn map_chart(chart: &ChartDataset) -> ChartVm {
    let entries = chart
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let color = PALETTE[idx % PALETTE.len()];
            ChartEntryVm {
                label: entry.label.clone(),
                percent_label: format_percent(entry.percent),
                color,
                bar_style: format!("width: {:.1}%; background: {color};", entry.percent),
            }
        })
        .collect();

    let pie_style = match chart.kind() {
        ChartKind::Pie => Some(pie_gradient(chart)),
        ChartKind::Bar => None,
    };

    ChartVm {
        title: chart.title().to_string(),
        kind: chart.kind(),
        entries,
        pie_style,
    }
}

fn pie_gradient(chart: &ChartDataset) -> String {
    let total = chart.total();
    let mut stops = String::new();
    let mut start = 0.0_f64;
    for (idx, entry) in chart.entries().iter().enumerate() {
        let share = if total > 0.0 {
            entry.percent / total * 100.0
        } else {
            0.0
        };
        let end = start + share;
        if !stops.is_empty() {
            stops.push_str(", ");
        }
        let color = PALETTE[idx % PALETTE.len()];
        let _ = write!(stops, "{color} {start:.1}% {end:.1}%");
        start = end;
    }
    if stops.is_empty() {
        stops.push_str("#ECF0F1 0% 100%");
    }
    format!("background: conic-gradient({stops});")
}

fn format_percent(value: f64) -> String {
    if (value - value.round()).abs() < 0.05 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_gets_gradient_and_labels() {
        let chart = ChartDataset::new("Composition", ChartKind::Pie)
            .with_entry("Majority", 86.0)
            .with_entry("Underserved", 14.0);
        let vm = map_chart(&chart);
        assert_eq!(vm.entries[1].percent_label, "14%");
        let style = vm.pie_style.expect("pie style");
        assert!(style.contains("#BDC3C7 0.0% 86.0%"));
        assert!(style.contains("#27AE60 86.0% 100.0%"));
    }

    #[test]
    fn bar_has_no_gradient() {
        let chart = ChartDataset::new("Cycle", ChartKind::Bar).with_entry("Research", 100.0);
        let vm = map_chart(&chart);
        assert!(vm.pie_style.is_none());
        assert!(vm.entries[0].bar_style.starts_with("width: 100.0%"));
    }

    #[test]
    fn fractional_percent_keeps_one_decimal() {
        assert_eq!(format_percent(14.0), "14%");
        assert_eq!(format_percent(26.4), "26.4%");
    }
}
