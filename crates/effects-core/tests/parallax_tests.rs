use effects_core::constants::{PARALLAX_FACTOR, TILT_DIVISOR_PX, TILT_PERSPECTIVE_PX};
use effects_core::{
    parallax_offset, parallax_transform, tilt_for_cursor, Bounds, Tilt, TiltTransition,
};
use glam::DVec2;

fn region() -> Bounds {
    Bounds {
        left: 100.0,
        top: 200.0,
        width: 600.0,
        height: 400.0,
    }
}

#[test]
fn parallax_moves_at_a_fraction_of_scroll() {
    assert_eq!(parallax_offset(0.0, PARALLAX_FACTOR), 0.0);
    assert!((parallax_offset(100.0, PARALLAX_FACTOR) - 30.0).abs() < 1e-9);
    assert_eq!(parallax_transform(0.0, PARALLAX_FACTOR), "translateY(0px)");
    assert_eq!(parallax_transform(1000.0, 0.5), "translateY(500px)");
}

#[test]
fn cursor_at_center_is_neutral() {
    let b = region();
    assert_eq!(b.center(), DVec2::new(400.0, 400.0));
    let tilt = tilt_for_cursor(&b, b.center(), TILT_DIVISOR_PX);
    assert_eq!(tilt, Tilt::NEUTRAL);
    assert_eq!(
        tilt.to_css(TILT_PERSPECTIVE_PX),
        "perspective(1000px) rotateY(0deg) rotateX(0deg)"
    );
}

#[test]
fn horizontal_offset_rotates_around_y() {
    let b = region();
    let tilt = tilt_for_cursor(&b, b.center() + DVec2::new(150.0, 0.0), TILT_DIVISOR_PX);
    assert_eq!(tilt.rotate_y_deg, 1.0);
    assert_eq!(tilt.rotate_x_deg, 0.0);
}

#[test]
fn vertical_offset_rotates_around_x_inverted() {
    let b = region();
    let tilt = tilt_for_cursor(&b, b.center() + DVec2::new(0.0, 150.0), TILT_DIVISOR_PX);
    assert_eq!(tilt.rotate_x_deg, -1.0);
    assert_eq!(tilt.rotate_y_deg, 0.0);

    let tilt = tilt_for_cursor(&b, b.center() + DVec2::new(-75.0, -300.0), TILT_DIVISOR_PX);
    assert_eq!(tilt.rotate_y_deg, -0.5);
    assert_eq!(tilt.rotate_x_deg, 2.0);
    assert_eq!(
        tilt.to_css(TILT_PERSPECTIVE_PX),
        "perspective(1000px) rotateY(-0.5deg) rotateX(2deg)"
    );
}

#[test]
fn tilt_is_bounded_by_region_size() {
    let b = region();
    for (x, y) in [(100.0, 200.0), (700.0, 600.0), (100.0, 600.0), (700.0, 200.0)] {
        let tilt = tilt_for_cursor(&b, DVec2::new(x, y), TILT_DIVISOR_PX);
        assert!(tilt.rotate_y_deg.abs() <= b.width / 2.0 / TILT_DIVISOR_PX);
        assert!(tilt.rotate_x_deg.abs() <= b.height / 2.0 / TILT_DIVISOR_PX);
    }
}

#[test]
fn zero_divisor_stays_neutral() {
    let b = region();
    assert_eq!(tilt_for_cursor(&b, DVec2::new(0.0, 0.0), 0.0), Tilt::NEUTRAL);
}

#[test]
fn leaving_is_slower_than_entering() {
    assert_eq!(TiltTransition::Enter.css(), "transform 0.1s ease");
    assert_eq!(TiltTransition::Leave.css(), "transform 0.5s ease");
}
