//! Point math shared by every annotation variant.
//!
//! Angles are radians. Positive angles turn +x toward +y, which on a
//! y-down canvas reads as clockwise on screen, matching the surface's own
//! `rotate` convention so model rotation and painted rotation agree.

use serde::{Deserialize, Serialize};

/// A position in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(self.x / 2.0 + other.x / 2.0, self.y / 2.0 + other.y / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Rotates `p` about `center` by `angle` radians.
pub fn rotate_point(p: Point, center: Point, angle: f64) -> Point {
    let s = angle.sin();
    let c = angle.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Distance from `p` to the segment `a`-`b`.
///
/// The projection parameter is clamped to the segment, so points beyond either
/// end measure to that endpoint. A zero-length segment degrades to the
/// point-to-point distance.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let l2 = dx * dx + dy * dy;
    if l2 == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / l2).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * dx, a.y + t * dy);
    p.distance_to(&proj)
}

/// Scales `point` away from `anchor` in the frame rotated by `angle`.
///
/// The point is taken into the anchor's un-rotated frame, scaled per axis,
/// then rotated back. `anchor` itself is a fixed point of the mapping.
pub fn scale_point(point: Point, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Point {
    let local = rotate_point(point, anchor, -angle);
    let scaled = Point::new(
        anchor.x + (local.x - anchor.x) * scale_x,
        anchor.y + (local.y - anchor.y) * scale_y,
    );
    rotate_point(scaled, anchor, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_maps_x_axis_to_y_axis() {
        let p = rotate_point(Point::new(10.0, 0.0), Point::default(), FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn scale_point_keeps_anchor_fixed() {
        let anchor = Point::new(3.0, -2.0);
        let p = scale_point(anchor, anchor, 0.7, 2.5, 0.25);
        assert!(p.distance_to(&anchor) < 1e-12);
    }
}
