use serde::{Deserialize, Serialize};

/// Visual emphasis of a display block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

/// A canned piece of narrative selected by a section outcome.
///
/// `body` is markdown; the UI renders and sanitizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBlock {
    tone: Tone,
    heading: Option<String>,
    body: String,
}

impl DisplayBlock {
    #[must_use]
    pub fn new(tone: Tone, body: impl Into<String>) -> Self {
        Self {
            tone,
            heading: None,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }

    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// True when neither heading nor body carries any text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
            && self
                .heading
                .as_deref()
                .is_none_or(|heading| heading.trim().is_empty())
    }

    /// Apply `f` to heading and body, keeping the tone.
    #[must_use]
    pub fn map_text(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            tone: self.tone,
            heading: self.heading.as_deref().map(&f),
            body: f(&self.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_considers_heading_and_body() {
        assert!(DisplayBlock::new(Tone::Info, "  ").is_blank());
        assert!(!DisplayBlock::new(Tone::Info, "text").is_blank());
        assert!(!DisplayBlock::new(Tone::Info, "").with_heading("Heading").is_blank());
    }

    #[test]
    fn map_text_rewrites_heading_and_body() {
        let block = DisplayBlock::new(Tone::Success, "a {x}")
            .with_heading("h {x}")
            .map_text(|text| text.replace("{x}", "y"));
        assert_eq!(block.body(), "a y");
        assert_eq!(block.heading(), Some("h y"));
        assert_eq!(block.tone(), Tone::Success);
    }
}
