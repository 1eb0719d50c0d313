use serde::{Deserialize, Serialize};

use chartmark_core::{BoundingBox, Point};

use super::{
    endpoints, segment_center, shift, stretch, stretch_box, unrotate, AnnotationShape,
    DrawingStyle,
};

/// Box given by two opposite corners, rotated by `angle` about its center.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleDrawing {
    #[serde(default)]
    pub start: Option<Point>,
    #[serde(default)]
    pub end: Option<Point>,
    /// Rotation in radians.
    #[serde(default, deserialize_with = "super::angle_or_zero")]
    pub angle: f64,
    #[serde(flatten)]
    pub style: DrawingStyle,
}

impl RectangleDrawing {
    pub fn new(start: Point, end: Point, style: DrawingStyle) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            angle: 0.0,
            style,
        }
    }

    /// Top-left corner and size of the box before rotation.
    pub fn frame(&self) -> Option<(Point, f64, f64)> {
        let (a, b) = endpoints(self.start, self.end)?;
        Some((
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            (b.x - a.x).abs(),
            (b.y - a.y).abs(),
        ))
    }
}

impl AnnotationShape for RectangleDrawing {
    fn center(&self) -> Point {
        segment_center(self.start, self.end)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        let (origin, width, height) = self.frame()?;
        Some(BoundingBox::rotated_rect(
            origin,
            width,
            height,
            self.center(),
            self.angle,
        ))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let Some((origin, width, height)) = self.frame() else {
            return false;
        };
        let p = unrotate(point, self.center(), self.angle);
        p.x >= origin.x - tolerance
            && p.x <= origin.x + width + tolerance
            && p.y >= origin.y - tolerance
            && p.y <= origin.y + height + tolerance
    }

    fn is_complete(&self) -> bool {
        endpoints(self.start, self.end).is_some()
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            start: shift(self.start, dx, dy),
            end: shift(self.end, dx, dy),
            angle: self.angle,
            style: self.style.clone(),
        }
    }

    fn rotated(&self, angle_delta: f64) -> Self {
        Self {
            angle: self.angle + angle_delta,
            ..self.clone()
        }
    }

    fn scaled_from(&self, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Self {
        let (start, end) = match endpoints(self.start, self.end) {
            Some((a, b)) => {
                let (a, b) = stretch_box(a, b, anchor, angle, scale_x, scale_y);
                (Some(a), Some(b))
            }
            None => (
                stretch(self.start, anchor, angle, scale_x, scale_y),
                stretch(self.end, anchor, angle, scale_x, scale_y),
            ),
        };
        Self {
            start,
            end,
            angle: self.angle,
            style: self.style.clone(),
        }
    }
}
