//! Platform-independent side of the page effects: tuning constants, the
//! particle, reveal, menu and tilt models, and the style definitions. The
//! wasm front-end turns these decisions into DOM mutations.

pub mod config;
pub mod constants;
pub mod error;
pub mod nav;
pub mod parallax;
pub mod particles;
pub mod readout;
pub mod reveal;
pub mod styles;

pub use config::*;
pub use error::EffectsError;
pub use nav::*;
pub use parallax::*;
pub use particles::*;
pub use readout::*;
pub use reveal::*;
pub use styles::*;
