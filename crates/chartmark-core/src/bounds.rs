//! Derived bounding boxes.

use serde::{Deserialize, Serialize};

use crate::geometry::{rotate_point, Point};

/// Box enclosing a shape's geometry.
///
/// `min_*`/`max_*` are the axis-aligned extents of the (possibly rotated)
/// corners. `width`/`height` are the box's own extents before rotation, so a
/// rotated rectangle reports its real side lengths rather than the size of its
/// axis-aligned envelope. `corners` run clockwise from the top-left corner of
/// the un-rotated box, in their painted (rotated) positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub angle: f64,
    pub corners: [Point; 4],
}

impl BoundingBox {
    /// Axis-aligned extents of `points`.
    ///
    /// `angle` is recorded on the result but does not rotate anything; callers
    /// that hold already-rotated corners use this as the final wrap. Returns
    /// `None` for an empty slice.
    pub fn from_points(points: &[Point], angle: f64) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
            center: Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
            angle,
            corners: [
                Point::new(min_x, min_y),
                Point::new(max_x, min_y),
                Point::new(max_x, max_y),
                Point::new(min_x, max_y),
            ],
        })
    }

    /// Box of an axis-aligned `width` x `height` rectangle whose top-left
    /// corner is `origin`, rotated by `angle` about `pivot`.
    pub fn rotated_rect(origin: Point, width: f64, height: f64, pivot: Point, angle: f64) -> Self {
        let corners = [
            origin,
            Point::new(origin.x + width, origin.y),
            Point::new(origin.x + width, origin.y + height),
            Point::new(origin.x, origin.y + height),
        ]
        .map(|p| {
            if angle != 0.0 {
                rotate_point(p, pivot, angle)
            } else {
                p
            }
        });
        let visual_center = Point::new(origin.x + width / 2.0, origin.y + height / 2.0);
        let center = if angle != 0.0 {
            rotate_point(visual_center, pivot, angle)
        } else {
            visual_center
        };

        let mut bbox = Self::from_points(&corners, angle).unwrap_or_else(|| Self::empty(angle));
        bbox.width = width;
        bbox.height = height;
        bbox.center = center;
        bbox.corners = corners;
        bbox
    }

    fn empty(angle: f64) -> Self {
        Self {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
            width: 0.0,
            height: 0.0,
            center: Point::default(),
            angle,
            corners: [Point::default(); 4],
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
