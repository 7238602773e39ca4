use crate::styles::css_seconds;
use std::time::Duration;

/// Reveal progress of a section or card. `Revealed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Feed one intersection report. Leaving the viewport never hides again.
    #[must_use]
    pub fn observe(self, is_intersecting: bool) -> RevealState {
        match (self, is_intersecting) {
            (RevealState::Pending, true) => RevealState::Revealed,
            (state, _) => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Delay for the `index`-th child of a revealed section.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * index as u32
}

pub fn stagger_delay_css(index: usize, step: Duration) -> String {
    css_seconds(stagger_delay(index, step))
}
