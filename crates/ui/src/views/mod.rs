mod components;
mod lesson;
mod state;
mod widgets;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use lesson::LessonView;
pub use state::ViewError;
