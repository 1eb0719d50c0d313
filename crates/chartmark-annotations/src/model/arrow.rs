use serde::{Deserialize, Serialize};

use chartmark_core::constants::{DEFAULT_HEAD_LENGTH, DEFAULT_HEAD_WIDTH};
use chartmark_core::{distance_to_segment, BoundingBox, Point};

use super::{
    endpoints, segment_bounds, segment_center, shift, spin, stretch, AnnotationShape,
    DrawingStyle,
};

/// Segment with a triangular head at `end`.
///
/// Only the shaft takes part in hit testing; the head is decoration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowDrawing {
    #[serde(default)]
    pub start: Option<Point>,
    #[serde(default)]
    pub end: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_width: Option<f64>,
    #[serde(flatten)]
    pub style: DrawingStyle,
}

impl ArrowDrawing {
    pub fn new(start: Point, end: Point, style: DrawingStyle) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            head_length: Some(DEFAULT_HEAD_LENGTH),
            head_width: Some(DEFAULT_HEAD_WIDTH),
            style,
        }
    }

    pub fn head_length(&self) -> f64 {
        self.head_length.unwrap_or(DEFAULT_HEAD_LENGTH)
    }

    pub fn head_width(&self) -> f64 {
        self.head_width.unwrap_or(DEFAULT_HEAD_WIDTH)
    }

    fn with_endpoints(&self, start: Option<Point>, end: Option<Point>) -> Self {
        Self {
            start,
            end,
            head_length: self.head_length,
            head_width: self.head_width,
            style: self.style.clone(),
        }
    }
}

impl AnnotationShape for ArrowDrawing {
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
