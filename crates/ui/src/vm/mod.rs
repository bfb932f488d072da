mod chart_vm;
mod lesson_vm;
mod markdown_vm;

pub use chart_vm::{ChartEntryVm, ChartVm, map_chart};
pub use lesson_vm::{
    BlockVm, LessonVm, NavItemVm, SectionPageVm, TrackOptionVm, map_block, map_lesson,
};
pub use markdown_vm::{markdown_inline, markdown_to_html, sanitize_html};
