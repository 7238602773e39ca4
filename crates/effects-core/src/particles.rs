//! Flow particle model.
//!
//! A particle is a short-lived marker that crosses one of the two pipeline
//! containers. Everything about its look is decided here; the web side only
//! copies the resulting CSS values onto a fresh element.

use crate::constants::*;
use crate::styles::css_seconds;
use fnv::FnvHashMap;
use rand::Rng;
use std::time::Duration;

/// Which way a particle travels, and therefore which container feeds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowDirection {
    Left,
    Right,
}

impl FlowDirection {
    pub const ALL: [FlowDirection; 2] = [FlowDirection::Left, FlowDirection::Right];

    pub fn container_id(self) -> &'static str {
        match self {
            FlowDirection::Left => FLOW_LEFT_CONTAINER_ID,
            FlowDirection::Right => FLOW_RIGHT_CONTAINER_ID,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            FlowDirection::Left => FLOW_LEFT_COLOR,
            FlowDirection::Right => FLOW_RIGHT_COLOR,
        }
    }

    /// Name of the keyframe definition that moves the particle.
    pub fn keyframes(self) -> &'static str {
        match self {
            FlowDirection::Left => "flowLeft",
            FlowDirection::Right => "flowRight",
        }
    }
}

/// Resolved appearance of one particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub direction: FlowDirection,
    pub y_offset_px: f64,
    pub lifetime: Duration,
}

impl ParticleSpec {
    /// Pick a random vertical offset in `[-band_half_px, band_half_px)`.
    pub fn random<R: Rng + ?Sized>(
        direction: FlowDirection,
        band_half_px: f64,
        lifetime: Duration,
        rng: &mut R,
    ) -> Self {
        let y_offset_px = -band_half_px + rng.gen::<f64>() * band_half_px * 2.0;
        Self {
            direction,
            y_offset_px,
            lifetime,
        }
    }

    pub fn top(&self) -> String {
        format!("calc(50% + {}px)", self.y_offset_px)
    }

    pub fn background(&self) -> &'static str {
        self.direction.color()
    }

    pub fn box_shadow(&self) -> String {
        format!("0 0 {}px {}", PARTICLE_GLOW_PX, self.direction.color())
    }

    pub fn left(&self) -> &'static str {
        "0"
    }

    pub fn animation(&self) -> String {
        format!(
            "{} {} {} forwards",
            self.direction.keyframes(),
            css_seconds(self.lifetime),
            PARTICLE_EASING
        )
    }

    /// `(property, value)` pairs to apply to the particle element.
    pub fn style_properties(&self) -> [(&'static str, String); 5] {
        [
            ("top", self.top()),
            ("background", self.background().to_string()),
            ("box-shadow", self.box_shadow()),
            ("left", self.left().to_string()),
            ("animation", self.animation()),
        ]
    }
}

/// Upper bound on simultaneously live particles for one container.
pub fn max_live_particles(lifetime: Duration, period: Duration) -> usize {
    let period_ns = period.as_nanos();
    if period_ns == 0 {
        return usize::MAX;
    }
    let lifetime_ns = lifetime.as_nanos();
    lifetime_ns.div_ceil(period_ns) as usize
}

pub type ParticleId = u64;

/// Bookkeeping for the particles of one container.
///
/// Times are offsets from an arbitrary origin chosen by the caller.
#[derive(Debug, Default)]
pub struct ParticleLedger {
    lifetime: Duration,
    next_id: ParticleId,
    live: FnvHashMap<ParticleId, Duration>,
    peak: usize,
}

impl ParticleLedger {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            ..Default::default()
        }
    }

    /// Record a particle created at `now`; it is due for removal at `now + lifetime`.
    pub fn spawn(&mut self, now: Duration) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id, now + self.lifetime);
        self.peak = self.peak.max(self.live.len());
        id
    }

    /// Forget a particle whose element has been removed.
    pub fn retire(&mut self, id: ParticleId) -> bool {
        self.live.remove(&id).is_some()
    }

    /// Drop every particle due at or before `now`, returning their ids.
    pub fn expire(&mut self, now: Duration) -> Vec<ParticleId> {
        let mut due: Vec<ParticleId> = self
            .live
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(id, _)| *id)
            .collect();
        due.sort_unstable();
        for id in &due {
            self.live.remove(id);
        }
        due
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn peak(&self) -> usize {
        self.peak
    }

    pub fn spawned(&self) -> u64 {
        self.next_id
    }
}
