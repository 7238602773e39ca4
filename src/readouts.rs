use crate::dom::{self, Interval};
use effects_core::constants::READOUT_SELECTOR;
use effects_core::{EffectsConfig, EffectsError, Readout};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Periodically re-rolls the FREQ/AMP readouts on the illustration.
pub struct ReadoutAnimator {
    _timer: Interval,
}

impl ReadoutAnimator {
    pub fn start(
        window: &web::Window,
        document: &web::Document,
        config: &EffectsConfig,
        rng: Rc<RefCell<StdRng>>,
    ) -> Result<Option<Self>, EffectsError> {
        let items = dom::query_all(document, READOUT_SELECTOR);
        if items.is_empty() {
            log::debug!("[readouts] no {}, disabled", READOUT_SELECTOR);
            return Ok(None);
        }
        log::info!("[readouts] animating {} items", items.len());
        let timer = Interval::new(window, config.readout_period, move || {
            let mut rng = rng.borrow_mut();
            for item in &items {
                let text = item.text_content().unwrap_or_default();
                if let Some(readout) = Readout::classify(&text) {
                    let value = readout.sample(&mut *rng);
                    item.set_inner_html(&readout.render(value));
                }
            }
        })?;
        Ok(Some(Self { _timer: timer }))
    }
}
