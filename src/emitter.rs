use crate::dom::{self, js_err, Interval};
use effects_core::constants::PARTICLE_CLASS;
use effects_core::{
    max_live_particles, EffectsConfig, EffectsError, FlowDirection, ParticleLedger, ParticleSpec,
};
use instant::Instant;
use rand::rngs::StdRng;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Lane {
    direction: FlowDirection,
    ledger: Rc<RefCell<ParticleLedger>>,
    _timer: Interval,
}

/// Spawns particles into each pipeline container that exists on the page.
pub struct FlowEmitter {
    lanes: SmallVec<[Lane; 2]>,
}

impl FlowEmitter {
    pub fn start(
        window: &web::Window,
        document: &web::Document,
        config: &EffectsConfig,
        rng: Rc<RefCell<StdRng>>,
    ) -> Result<Option<Self>, EffectsError> {
        let mut lanes = SmallVec::new();
        for direction in FlowDirection::ALL {
            let Some(container) = document.get_element_by_id(direction.container_id()) else {
                log::debug!(
                    "[particles] no #{}, {:?} disabled",
                    direction.container_id(),
                    direction
                );
                continue;
            };
            let lane = start_lane(window, document, container, direction, config, rng.clone())?;
            lanes.push(lane);
        }
        if lanes.is_empty() {
            return Ok(None);
        }
        log::info!(
            "[particles] {} lane(s), every {:?}, at most {} live each",
            lanes.len(),
            config.spawn_period,
            max_live_particles(config.particle_lifetime, config.spawn_period)
        );
        Ok(Some(Self { lanes }))
    }
}

impl Drop for FlowEmitter {
    fn drop(&mut self) {
        for lane in &self.lanes {
            let ledger = lane.ledger.borrow();
            log::debug!(
                "[particles] {:?} stopped after {} spawns, peak {} ({} still fading)",
                lane.direction,
                ledger.spawned(),
                ledger.peak(),
                ledger.live()
            );
        }
    }
}

fn start_lane(
    window: &web::Window,
    document: &web::Document,
    container: web::Element,
    direction: FlowDirection,
    config: &EffectsConfig,
    rng: Rc<RefCell<StdRng>>,
) -> Result<Lane, EffectsError> {
    let ledger = Rc::new(RefCell::new(ParticleLedger::new(config.particle_lifetime)));
    let origin = Instant::now();
    let band = config.particle_band_half_px;
    let lifetime = config.particle_lifetime;
    let bound = max_live_particles(lifetime, config.spawn_period);

    let tick_window = window.clone();
    let tick_document = document.clone();
    let tick_ledger = ledger.clone();
    let timer = Interval::new(window, config.spawn_period, move || {
        let spec = ParticleSpec::random(direction, band, lifetime, &mut *rng.borrow_mut());
        let now = origin.elapsed();
        let spawned = spawn_particle(
            &tick_window,
            &tick_document,
            &container,
            &spec,
            &tick_ledger,
            now,
        );
        if let Err(e) = spawned {
            log::warn!("[particles] spawn failed: {}", e);
        }
        // entries a full lifetime past due lost their removal timer
        let stale = tick_ledger.borrow_mut().expire(now.saturating_sub(lifetime));
        if !stale.is_empty() {
            log::debug!("[particles] {:?} dropped {} stale entries", direction, stale.len());
        }
        let live = tick_ledger.borrow().live();
        if live > bound {
            // timers ran out of order, e.g. after the tab was throttled
            log::debug!("[particles] {:?} has {} live (bound {})", direction, live, bound);
        }
    })?;

    Ok(Lane {
        direction,
        ledger,
        _timer: timer,
    })
}

/// Append one particle and schedule its removal after its lifetime.
fn spawn_particle(
    window: &web::Window,
    document: &web::Document,
    container: &web::Element,
    spec: &ParticleSpec,
    ledger: &Rc<RefCell<ParticleLedger>>,
    now: std::time::Duration,
) -> Result<(), EffectsError> {
    let el = document
        .create_element("div")
        .map_err(js_err("createElement"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| EffectsError::js("createElement", "div is not an HtmlElement"))?;
    el.set_class_name(PARTICLE_CLASS);
    for (property, value) in spec.style_properties() {
        dom::set_style(&el, property, &value);
    }
    container.append_child(&el).map_err(js_err("appendChild"))?;

    let id = ledger.borrow_mut().spawn(now);
    log::trace!("[particles] {:?} #{} live={}", spec.direction, id, ledger.borrow().live());

    let doomed = el.clone();
    let doomed_ledger = ledger.clone();
    let removal = dom::set_timeout_once(window, spec.lifetime, move || {
        doomed.remove();
        doomed_ledger.borrow_mut().retire(id);
    });
    if let Err(e) = removal {
        // Without a timer nothing would ever remove it
        el.remove();
        ledger.borrow_mut().retire(id);
        return Err(e);
    }
    Ok(())
}
