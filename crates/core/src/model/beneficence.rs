use serde::{Deserialize, Serialize};

/// Stages of the ethical data cycle shown in the beneficence demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleStage {
    Acquisition,
    Research,
    ReturnOfValue,
}

impl CycleStage {
    pub const ALL: [CycleStage; 3] = [
        CycleStage::Acquisition,
        CycleStage::Research,
        CycleStage::ReturnOfValue,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CycleStage::Acquisition => "Acquisition",
            CycleStage::Research => "Research",
            CycleStage::ReturnOfValue => "Return of Value",
        }
    }
}

/// Whether research results have been shared back with participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoopState {
    closed: bool,
}

impl LoopState {
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Flip the loop and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.closed = !self.closed;
        self.closed
    }

    /// Completion of `stage`, in percent. Only the return stage depends on the loop.
    #[must_use]
    pub fn stage_progress(&self, stage: CycleStage) -> u8 {
        match stage {
            CycleStage::Acquisition | CycleStage::Research => 100,
            CycleStage::ReturnOfValue => {
                if self.closed {
                    100
                } else {
                    0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        let mut state = LoopState::default();
        let original = state.is_closed();
        assert!(state.toggle());
        assert!(!state.toggle());
        assert_eq!(state.is_closed(), original);
    }

    #[test]
    fn return_stage_tracks_loop() {
        let mut state = LoopState::default();
        assert_eq!(state.stage_progress(CycleStage::ReturnOfValue), 0);
        assert_eq!(state.stage_progress(CycleStage::Research), 100);
        state.toggle();
        assert_eq!(state.stage_progress(CycleStage::ReturnOfValue), 100);
    }
}
