use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub percent: f64,
}

/// Small categorical dataset handed to a chart renderer.
///
/// The renderer owns pixels; this type only carries `label -> percent` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    title: String,
    kind: ChartKind,
    entries: Vec<ChartEntry>,
}

impl ChartDataset {
    #[must_use]
    pub fn new(title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            title: title.into(),
            kind,
            entries: Vec::new(),
        }
    }

    /// Append an entry; `percent` is clamped into `0..=100`.
    #[must_use]
    pub fn with_entry(mut self, label: impl Into<String>, percent: f64) -> Self {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.entries.push(ChartEntry {
            label: label.into(),
            percent,
        });
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.percent).sum()
    }
}
