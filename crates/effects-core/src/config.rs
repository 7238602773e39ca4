use crate::constants::*;
use crate::styles::{StyleGroup, StyleSheet};
use smallvec::SmallVec;
use std::time::Duration;

/// Tuning and feature switches for one controller instance.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub particles: bool,
    pub reveal: bool,
    pub navigation: bool,
    pub parallax: bool,
    pub readouts: bool,

    pub spawn_period: Duration,
    pub particle_lifetime: Duration,
    pub particle_band_half_px: f64,

    pub reveal_threshold: f64,
    pub reveal_stagger: Duration,

    pub shadow_threshold_px: f64,
    pub scroll_margin_px: f64,

    pub parallax_factor: f64,
    pub tilt_divisor_px: f64,
    pub tilt_perspective_px: u32,

    pub readout_period: Duration,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particles: true,
            reveal: true,
            navigation: true,
            parallax: true,
            readouts: false,
            spawn_period: PARTICLE_SPAWN_PERIOD,
            particle_lifetime: PARTICLE_LIFETIME,
            particle_band_half_px: PARTICLE_BAND_HALF_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_stagger: REVEAL_STAGGER,
            shadow_threshold_px: NAV_SHADOW_THRESHOLD_PX,
            scroll_margin_px: SCROLL_TARGET_MARGIN_PX,
            parallax_factor: PARALLAX_FACTOR,
            tilt_divisor_px: TILT_DIVISOR_PX,
            tilt_perspective_px: TILT_PERSPECTIVE_PX,
            readout_period: READOUT_PERIOD,
        }
    }
}

#[inline]
pub fn parse_switch(value: &str) -> Option<bool> {
    match value.trim() {
        "on" | "true" | "1" | "" => Some(true),
        "off" | "false" | "0" => Some(false),
        _ => None,
    }
}

impl EffectsConfig {
    /// Apply one `data-effects-<name>` switch. Returns false when the name or
    /// value is not recognised; the config is then left untouched.
    pub fn apply_flag(&mut self, name: &str, value: &str) -> bool {
        let Some(on) = parse_switch(value) else {
            log::debug!("[config] ignoring {}={:?}", name, value);
            return false;
        };
        let slot = match name {
            "particles" => &mut self.particles,
            "reveal" => &mut self.reveal,
            "navigation" | "nav" => &mut self.navigation,
            "parallax" => &mut self.parallax,
            "readouts" => &mut self.readouts,
            _ => {
                log::debug!("[config] unknown switch {}", name);
                return false;
            }
        };
        *slot = on;
        true
    }

    pub fn style_groups(&self) -> SmallVec<[StyleGroup; 3]> {
        let mut groups = SmallVec::new();
        if self.particles {
            groups.push(StyleGroup::Particles);
        }
        if self.reveal {
            groups.push(StyleGroup::Reveal);
        }
        if self.navigation {
            groups.push(StyleGroup::MobileMenu);
        }
        groups
    }

    /// Sheet holding every rule the enabled behaviors need.
    pub fn stylesheet(&self) -> StyleSheet {
        self.style_groups()
            .into_iter()
            .fold(StyleSheet::new(), StyleSheet::with_group)
    }
}
