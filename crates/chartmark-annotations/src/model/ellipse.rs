use serde::{Deserialize, Serialize};

use chartmark_core::{BoundingBox, Point};

use super::{
    endpoints, segment_center, shift, stretch, stretch_box, unrotate, AnnotationShape,
    DrawingStyle,
};

/// Ellipse inscribed in the box spanned by `start` and `end`, rotated by
/// `angle` about its center.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EllipseDrawing {
    #[serde(default)]
    pub start: Option<Point>,
    #[serde(default)]
    pub end: Option<Point>,
    #[serde(default, deserialize_with = "super::angle_or_zero")]
    pub angle: f64,
    #[serde(flatten)]
    pub style: DrawingStyle,
}

impl EllipseDrawing {
    pub fn new(start: Point, end: Point, style: DrawingStyle) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            angle: 0.0,
            style,
        }
    }

    /// Painted radii. A flat box still yields a 1px radius.
    pub fn radii(&self) -> Option<(f64, f64)> {
        let (a, b) = endpoints(self.start, self.end)?;
        Some((
            ((b.x - a.x).abs() / 2.0).max(1.0),
            ((b.y - a.y).abs() / 2.0).max(1.0),
        ))
    }
}

impl AnnotationShape for EllipseDrawing {
    fn center(&self) -> Point {
        segment_center(self.start, self.end)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        let (a, b) = endpoints(self.start, self.end)?;
        let origin = Point::new(a.x.min(b.x), a.y.min(b.y));
        Some(BoundingBox::rotated_rect(
            origin,
            (b.x - a.x).abs(),
            (b.y - a.y).abs(),
            self.center(),
            self.angle,
        ))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let Some((rx, ry)) = self.radii() else {
            return false;
        };
        let center = self.center();
        let p = unrotate(point, center, self.angle);
        let nx = (p.x - center.x) / (rx + tolerance);
        let ny = (p.y - center.y) / (ry + tolerance);
        nx * nx + ny * ny <= 1.0
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
