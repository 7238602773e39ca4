use crate::emitter::FlowEmitter;
use crate::nav::NavController;
use crate::parallax::ParallaxController;
use crate::readouts::ReadoutAnimator;
use crate::reveal::ScrollReveal;
use crate::styles::{self, InstalledStyles};
use effects_core::EffectsConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Every effect running on the page, owned in one place.
///
/// Dropping the controller (or calling [`EffectsController::teardown`])
/// detaches all listeners, stops all timers, disconnects the observer and
/// removes the installed styles. Particles already on screen still fade out
/// and remove themselves.
pub struct EffectsController {
    particles: Option<FlowEmitter>,
    reveal: Option<ScrollReveal>,
    nav: Option<NavController>,
    parallax: Option<ParallaxController>,
    readouts: Option<ReadoutAnimator>,
    // last, so rules outlive the behaviors relying on them
    _styles: InstalledStyles,
}

impl EffectsController {
    pub fn new(
        window: &web::Window,
        document: &web::Document,
        config: &EffectsConfig,
    ) -> anyhow::Result<Self> {
        let styles = styles::install(document, &config.stylesheet())?;
        let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

        let particles = if config.particles {
            FlowEmitter::start(window, document, config, rng.clone())?
        } else {
            None
        };
        let reveal = if config.reveal {
            ScrollReveal::start(document, config)?
        } else {
            None
        };
        let nav = if config.navigation {
            NavController::start(window, document, config)?
        } else {
            None
        };
        let parallax = if config.parallax {
            ParallaxController::start(window, document, config)?
        } else {
            None
        };
        let readouts = if config.readouts {
            ReadoutAnimator::start(window, document, config, rng)?
        } else {
            None
        };

        let controller = Self {
            particles,
            reveal,
            nav,
            parallax,
            readouts,
            _styles: styles,
        };
        log::info!("[effects] running: {}", controller.running().join(", "));
        Ok(controller)
    }

    /// Names of the behaviors that found their elements and started.
    pub fn running(&self) -> Vec<&'static str> {
        [
            ("particles", self.particles.is_some()),
            ("reveal", self.reveal.is_some()),
            ("nav", self.nav.is_some()),
            ("parallax", self.parallax.is_some()),
            ("readouts", self.readouts.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }

    pub fn teardown(self) {
        log::info!("[effects] teardown: {}", self.running().join(", "));
        drop(self);
    }
}
