use crate::constants::{TILT_ENTER_TRANSITION, TILT_LEAVE_TRANSITION};
use glam::DVec2;

/// Vertical drift of the background layer for a scroll offset.
#[inline]
pub fn parallax_offset(scroll: f64, factor: f64) -> f64 {
    scroll * factor
}

pub fn parallax_transform(scroll: f64, factor: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll, factor))
}

/// Client-space rectangle of the hover region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Rotation applied to the pipeline illustration, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    pub fn to_css(&self, perspective_px: u32) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg)",
            perspective_px, self.rotate_y_deg, self.rotate_x_deg
        )
    }
}

/// Tilt toward the cursor: horizontal offset turns around Y, vertical offset
/// turns around X with the sign flipped so the near edge dips.
pub fn tilt_for_cursor(bounds: &Bounds, cursor: DVec2, divisor: f64) -> Tilt {
    if divisor == 0.0 {
        return Tilt::NEUTRAL;
    }
    let delta = (cursor - bounds.center()) / divisor;
    Tilt {
        // avoid emitting "-0deg"
        rotate_x_deg: if delta.y == 0.0 { 0.0 } else { -delta.y },
        rotate_y_deg: delta.x,
    }
}

/// Transition speed for the tilt, chosen by whether the cursor is inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltTransition {
    Enter,
    Leave,
}

impl TiltTransition {
    pub fn css(self) -> &'static str {
        match self {
            TiltTransition::Enter => TILT_ENTER_TRANSITION,
            TiltTransition::Leave => TILT_LEAVE_TRANSITION,
        }
    }
}
