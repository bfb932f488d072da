use ethics_core::model::{DisplayBlock, LessonSession, Section, Tone, Track};
use services::{LessonService, SectionView, SectionWidget};

use crate::views::ViewError;
use crate::vm::chart_vm::{ChartVm, map_chart};
use crate::vm::markdown_vm::{markdown_inline, markdown_to_html};

/// Everything the lesson screen draws, already rendered to HTML where needed.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonVm {
    pub title: String,
    pub nav: Vec<NavItemVm>,
    pub tracks: Vec<TrackOptionVm>,
    pub page: SectionPageVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackOptionVm {
    pub track: Track,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionPageVm {
    pub section: Section,
    pub title: String,
    pub narrator_html: String,
    pub instruction_html: Option<String>,
    pub dataset_name: String,
    pub dataset_url: String,
    pub blocks: Vec<BlockVm>,
    pub widget: SectionWidget,
    pub outcome: Option<BlockVm>,
    pub chart: Option<ChartVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockVm {
    pub class: &'static str,
    /// Plain text; headings like "1. Autonomy" must not become lists.
    pub heading: Option<String>,
    pub body_html: String,
}

/// # Errors
///
/// Returns `ViewError::Internal` if the section view cannot be assembled.
pub fn map_lesson(service: &LessonService, session: &LessonSession) -> Result<LessonVm, ViewError> {
    let view = service.section_view(session).map_err(ViewError::from)?;
    let variant = service.variant();

    let nav = variant
        .sections()
        .iter()
        .map(|section| NavItemVm {
            section: *section,
            label: section.nav_label(),
            active: *section == view.section,
        })
        .collect();
    let tracks = Track::ALL
        .into_iter()
        .map(|track| TrackOptionVm {
            track,
            label: track.label(),
            active: track == view.track,
        })
        .collect();

    Ok(LessonVm {
        title: variant.title().to_string(),
        nav,
        tracks,
        page: map_page(view),
    })
}

fn map_page(view: SectionView) -> SectionPageVm {
    SectionPageVm {
        section: view.section,
        title: view.title,
        narrator_html: markdown_to_html(&view.narrator),
        instruction_html: view.instruction.as_deref().map(markdown_inline),
        dataset_name: view.dataset.name,
        dataset_url: view.dataset.url,
        blocks: view.blocks.iter().map(map_block).collect(),
        widget: view.widget,
        outcome: view.outcome.as_ref().map(map_block),
        chart: view.chart.as_ref().map(map_chart),
    }
}

#[must_use]
pub fn map_block(block: &DisplayBlock) -> BlockVm {
    BlockVm {
        class: tone_class(block.tone()),
        heading: block.heading().map(str::to_string),
        body_html: markdown_to_html(block.body()),
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "block block--neutral",
        Tone::Info => "block block--info",
        Tone::Success => "block block--success",
        Tone::Warning => "block block--warning",
        Tone::Error => "block block--error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethics_core::model::VariantKind;

    #[test]
    fn nav_marks_active_section() {
        let service = LessonService::builtin(VariantKind::Guided).unwrap();
        let session = service
            .start_session_at(Track::BasicScience, Section::Privacy)
            .unwrap();
        let vm = map_lesson(&service, &session).unwrap();
        assert_eq!(vm.nav.len(), 6);
        let active: Vec<_> = vm.nav.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].section, Section::Privacy);
        assert!(vm.tracks.iter().any(|t| t.track == Track::BasicScience && t.active));
    }

    #[test]
    fn block_tone_maps_to_class() {
        let block = DisplayBlock::new(Tone::Error, "**Breach**").with_heading("AT RISK");
        let vm = map_block(&block);
        assert_eq!(vm.class, "block block--error");
        assert_eq!(vm.heading.as_deref(), Some("AT RISK"));
        assert!(vm.body_html.contains("<strong>Breach</strong>"));
    }
}
