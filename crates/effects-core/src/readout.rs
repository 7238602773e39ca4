//! Fluctuating instrument readouts on the pipeline illustration.

use crate::constants::{READOUT_AMP_V, READOUT_FREQ_KHZ};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readout {
    Frequency,
    Amplitude,
}

impl Readout {
    /// Decide what a readout shows from its current text. Frequency wins,
    /// since `kHz` readouts may also contain a capital `V` elsewhere.
    pub fn classify(text: &str) -> Option<Readout> {
        if text.contains("kHz") {
            Some(Readout::Frequency)
        } else if text.contains('V') {
            Some(Readout::Amplitude)
        } else {
            None
        }
    }

    pub fn range(self) -> (f64, f64) {
        match self {
            Readout::Frequency => READOUT_FREQ_KHZ,
            Readout::Amplitude => READOUT_AMP_V,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Readout::Frequency => "FREQ:",
            Readout::Amplitude => "AMP:",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Readout::Frequency => "kHz",
            Readout::Amplitude => "V",
        }
    }

    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        let (lo, hi) = self.range();
        lo + rng.gen::<f64>() * (hi - lo)
    }

    /// Markup for the readout, value at one decimal.
    pub fn render(self, value: f64) -> String {
        format!(
            "<span class=\"readout-label\">{}</span> {:.1}{}",
            self.label(),
            value,
            self.unit()
        )
    }
}
