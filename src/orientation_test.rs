#![allow(clippy::float_cmp)]

use super::*;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// A pointer `radius` away from `center` at bearing `deg`.
fn pointer_at(center: Point, deg: f64, radius: f64) -> Point {
    let rad = deg.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

fn tracking(smoothing: f64, offset: f64, current: f64) -> Orientation {
    Orientation { smoothing, rotation_offset: offset, current, center: Some(Point::default()) }
}

// =============================================================
// wrap_degrees
// =============================================================

#[test]
fn wrap_leaves_small_deltas_alone() {
    assert_eq!(wrap_degrees(0.0), 0.0);
    assert_eq!(wrap_degrees(45.0), 45.0);
    assert_eq!(wrap_degrees(-45.0), -45.0);
    assert_eq!(wrap_degrees(180.0), 180.0);
}

#[test]
fn wrap_maps_minus_180_to_plus_180() {
    assert_eq!(wrap_degrees(-180.0), 180.0);
}

#[test]
fn wrap_takes_the_short_way_round() {
    assert_eq!(wrap_degrees(-358.0), 2.0);
    assert_eq!(wrap_degrees(358.0), -2.0);
    assert_eq!(wrap_degrees(190.0), -170.0);
    assert_eq!(wrap_degrees(-190.0), 170.0);
}

#[test]
fn wrap_handles_multiple_turns() {
    assert_eq!(wrap_degrees(720.0 + 30.0), 30.0);
    assert_eq!(wrap_degrees(-1080.0 - 30.0), -30.0);
    assert_eq!(wrap_degrees(540.0), 180.0);
}

#[test]
fn wrap_result_is_always_in_half_open_range() {
    let mut d = -2000.0;
    while d <= 2000.0 {
        let w = wrap_degrees(d);
        assert!(w > -180.0 && w <= 180.0, "wrap({d}) = {w}");
        d += 7.25;
    }
}

#[test]
fn wrap_non_finite_is_zero() {
    assert_eq!(wrap_degrees(f64::NAN), 0.0);
    assert_eq!(wrap_degrees(f64::INFINITY), 0.0);
    assert_eq!(wrap_degrees(f64::NEG_INFINITY), 0.0);
}

// =============================================================
// target_angle
// =============================================================

#[test]
fn target_angle_cardinal_directions() {
    let c = Point::default();
    assert!(approx(target_angle(Point::new(10.0, 0.0), c, 0.0), 0.0));
    assert!(approx(target_angle(Point::new(0.0, 10.0), c, 0.0), 90.0));
    assert!(approx(target_angle(Point::new(-10.0, 0.0), c, 0.0), 180.0));
    assert!(approx(target_angle(Point::new(0.0, -10.0), c, 0.0), -90.0));
}

#[test]
fn target_angle_adds_offset() {
    let c = Point::new(100.0, 100.0);
    // Pointer straight above the center: bearing -90, default offset 90.
    assert!(approx(target_angle(Point::new(100.0, 50.0), c, 90.0), 0.0));
}

#[test]
fn target_angle_at_center_is_just_the_offset() {
    let c = Point::new(5.0, 5.0);
    assert_eq!(target_angle(c, c, 90.0), 90.0);
}

// =============================================================
// Phase
// =============================================================

#[test]
fn new_orientation_awaits_center() {
    let o = Orientation::new(0.1, 90.0);
    assert_eq!(o.phase(), Phase::AwaitingCenter);
    assert!(o.center().is_none());
    assert_eq!(o.current(), 0.0);
}

#[test]
fn set_center_moves_to_tracking() {
    let mut o = Orientation::new(0.1, 90.0);
    o.set_center(Rect::new(0.0, 0.0, 200.0, 300.0));
    assert_eq!(o.phase(), Phase::Tracking);
    assert_eq!(o.center(), Some(Point::new(100.0, 150.0)));
}

#[test]
fn step_without_center_uses_origin() {
    let mut o = Orientation::new(1.0, 0.0);
    let angle = o.step(Point::new(0.0, 10.0));
    assert!(approx(angle, 90.0));
    assert_eq!(o.phase(), Phase::AwaitingCenter);
}

#[test]
fn step_with_pointer_and_center_at_origin_moves_toward_offset() {
    let mut o = Orientation::new(0.5, 90.0);
    assert_eq!(o.step(Point::default()), 45.0);
}

// =============================================================
// Smoothing
// =============================================================

#[test]
fn boundary_crossing_uses_wrapped_delta() {
    let o = tracking(1.0, 0.0, 179.0);
    let pointer = pointer_at(Point::default(), -179.0, 100.0);
    assert!(approx(o.gap(pointer), 2.0));
}

#[test]
fn boundary_crossing_step_moves_forward_two_degrees() {
    let mut o = tracking(1.0, 0.0, 179.0);
    let pointer = pointer_at(Point::default(), -179.0, 100.0);
    assert!(approx(o.step(pointer), 181.0));
}

#[test]
fn smoothing_one_snaps_to_target() {
    let mut o = tracking(1.0, 90.0, 0.0);
    let pointer = pointer_at(Point::default(), 30.0, 50.0);
    assert!(approx(o.step(pointer), 120.0));
}

#[test]
fn step_closes_fraction_of_gap() {
    let mut o = tracking(0.25, 0.0, 0.0);
    let pointer = pointer_at(Point::default(), 80.0, 50.0);
    assert!(approx(o.step(pointer), 20.0));
    assert!(approx(o.step(pointer), 35.0));
}

#[test]
fn fixed_target_converges_monotonically() {
    let mut o = tracking(0.1, 90.0, 0.0);
    let pointer = pointer_at(Point::default(), 100.0, 80.0);
    let target = 190.0;
    let mut prev_gap = o.gap(pointer);
    assert!(prev_gap < 0.0, "short way to 190 from 0 is negative");
    for _ in 0..400 {
        o.step(pointer);
        let gap = o.gap(pointer);
        assert!(gap.abs() < prev_gap.abs() || gap.abs() < EPS);
        assert!(gap <= 0.0 || gap.abs() < EPS, "never overshoots");
        prev_gap = gap;
    }
    assert!(approx(wrap_degrees(o.current() - target), 0.0));
}

#[test]
fn applied_delta_is_bounded_by_smoothing() {
    let s = 0.3;
    let mut o = tracking(s, 90.0, 0.0);
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_precision_loss)]
        let deg = (seed >> 11) as f64 / (1u64 << 53) as f64 * 720.0 - 360.0;
        let pointer = pointer_at(Point::default(), deg, 40.0);
        let before = o.current();
        let after = o.step(pointer);
        let applied = after - before;
        assert!(applied > -180.0 * s - EPS && applied <= 180.0 * s + EPS, "applied {applied}");
    }
}

#[test]
fn heading_accumulates_past_full_turns() {
    let mut o = tracking(1.0, 0.0, 0.0);
    for k in 1..=8 {
        o.step(pointer_at(Point::default(), f64::from(k) * 90.0, 100.0));
    }
    assert!((o.current() - 720.0).abs() < 1e-6);
}
