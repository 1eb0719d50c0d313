use serde::{Deserialize, Serialize};

use chartmark_core::{distance_to_segment, BoundingBox, Point};

use super::{
    endpoints, segment_bounds, segment_center, shift, spin, stretch, AnnotationShape,
    DrawingStyle,
};

/// Straight segment between two points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDrawing {
    #[serde(default)]
    pub start: Option<Point>,
    #[serde(default)]
    pub end: Option<Point>,
    #[serde(flatten)]
    pub style: DrawingStyle,
}

impl LineDrawing {
    pub fn new(start: Point, end: Point, style: DrawingStyle) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            style,
        }
    }
}

impl AnnotationShape for LineDrawing {
    fn center(&self) -> Point {
        segment_center(self.start, self.end)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        segment_bounds(self.start, self.end)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        endpoints(self.start, self.end)
            .is_some_and(|(a, b)| distance_to_segment(point, a, b) <= tolerance)
    }

    fn is_complete(&self) -> bool {
        endpoints(self.start, self.end).is_some()
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            start: shift(self.start, dx, dy),
            end: shift(self.end, dx, dy),
            style: self.style.clone(),
        }
    }

    fn rotated(&self, angle_delta: f64) -> Self {
        let center = self.center();
        Self {
            start: spin(self.start, center, angle_delta),
            end: spin(self.end, center, angle_delta),
            style: self.style.clone(),
        }
    }

    fn scaled_from(&self, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            start: stretch(self.start, anchor, angle, scale_x, scale_y),
            end: stretch(self.end, anchor, angle, scale_x, scale_y),
            style: self.style.clone(),
        }
    }
}
