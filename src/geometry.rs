#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in viewport (client) coordinates, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An on-screen bounding box, as reported by `getBoundingClientRect`.
///
/// `left`/`top` are the minimum edges; `width`/`height` are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Geometric midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.left + (self.width / 2.0),
            y: self.top + (self.height / 2.0),
        }
    }

    /// Whether `pt` lies inside the box. All four edges are inclusive.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x <= self.right() && pt.y >= self.top && pt.y <= self.bottom()
    }
}
