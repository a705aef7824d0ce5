//! Orientation engine: turns the pointer position into a smoothed heading.
//!
//! Each frame computes the bearing from the widget center to the pointer,
//! takes the shortest signed difference to the current heading, and closes a
//! fixed fraction of that gap. The heading is an unbounded accumulator so the
//! CSS rotation never jumps when the bearing crosses ±180°.

#[cfg(test)]
#[path = "orientation_test.rs"]
mod orientation_test;

use crate::geometry::{Point, Rect};

/// Whether the widget center has been measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Mounted, center not yet measured. Frames use the origin as center.
    #[default]
    AwaitingCenter,
    /// Center known; following the pointer.
    Tracking,
}

/// Map a signed angle difference into (-180, 180].
///
/// Non-finite input maps to 0 so a bad frame never poisons the accumulator.
#[must_use]
pub fn wrap_degrees(delta: f64) -> f64 {
    if !delta.is_finite() {
        return 0.0;
    }
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Bearing from `center` to `pointer` in degrees, plus `offset`.
///
/// 0° points along +x; screen y grows downward so +90° points down.
#[must_use]
pub fn target_angle(pointer: Point, center: Point, offset: f64) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees() + offset
}

/// Smoothed heading state for one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Orientation {
    smoothing: f64,
    rotation_offset: f64,
    current: f64,
    center: Option<Point>,
}

impl Orientation {
    /// `smoothing` is expected in (0, 1]; the config resolver enforces this.
    #[must_use]
    pub fn new(smoothing: f64, rotation_offset: f64) -> Self {
        Self { smoothing, rotation_offset, current: 0.0, center: None }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.center.is_some() { Phase::Tracking } else { Phase::AwaitingCenter }
    }

    /// Accumulated heading in degrees. Not reduced modulo 360.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.center
    }

    /// Store the midpoint of `rect` as the rotation pivot.
    pub fn set_center(&mut self, rect: Rect) {
        self.center = Some(rect.center());
    }

    /// The wrapped difference between the bearing to `pointer` and the
    /// current heading, before smoothing.
    #[must_use]
    pub fn gap(&self, pointer: Point) -> f64 {
        let center = self.center.unwrap_or_default();
        wrap_degrees(target_angle(pointer, center, self.rotation_offset) - self.current)
    }

    /// Advance one frame toward `pointer` and return the new heading.
    pub fn step(&mut self, pointer: Point) -> f64 {
        self.current += self.gap(pointer) * self.smoothing;
        self.current
    }
}
