use thiserror::Error;

/// Failures that can occur while wiring effects into a page.
///
/// A missing optional element is never an error; those behaviors are skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EffectsError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{op} failed: {detail}")]
    Js { op: &'static str, detail: String },
}

impl EffectsError {
    pub fn js(op: &'static str, detail: impl Into<String>) -> Self {
        Self::Js {
            op,
            detail: detail.into(),
        }
    }
}
