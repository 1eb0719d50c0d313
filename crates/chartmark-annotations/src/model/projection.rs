use serde::{Deserialize, Serialize};

use chartmark_core::{distance_to_segment, BoundingBox, Point};

use super::{
    endpoints, segment_bounds, segment_center, shift, spin, stretch, AnnotationShape,
    DrawingStyle,
};

/// Dashed target line with an optional label beside its end point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionDrawing {
    #[serde(default)]
    pub start: Option<Point>,
    #[serde(default)]
    pub end: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// CSS font shorthand for the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(flatten)]
    pub style: DrawingStyle,
}

impl ProjectionDrawing {
    pub fn new(start: Point, end: Point, label: Option<String>, style: DrawingStyle) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            label,
            font: None,
            style,
        }
    }

    fn with_endpoints(&self, start: Option<Point>, end: Option<Point>) -> Self {
        Self {
            start,
            end,
            label: self.label.clone(),
            font: self.font.clone(),
            style: self.style.clone(),
        }
    }
}

impl AnnotationShape for ProjectionDrawing {
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
        self.with_endpoints(shift(self.start, dx, dy), shift(self.end, dx, dy))
    }

    fn rotated(&self, angle_delta: f64) -> Self {
        let center = self.center();
        self.with_endpoints(
            spin(self.start, center, angle_delta),
            spin(self.end, center, angle_delta),
        )
    }

    fn scaled_from(&self, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Self {
        self.with_endpoints(
            stretch(self.start, anchor, angle, scale_x, scale_y),
            stretch(self.end, anchor, angle, scale_x, scale_y),
        )
    }
}
