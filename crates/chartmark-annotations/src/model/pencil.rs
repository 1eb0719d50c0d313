use serde::{Deserialize, Serialize};

use chartmark_core::{distance_to_segment, rotate_point, scale_point, BoundingBox, Point};

use super::{AnnotationShape, DrawingStyle};

/// Freehand polyline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PencilDrawing {
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub style: DrawingStyle,
}

impl PencilDrawing {
    pub fn new(points: Vec<Point>, style: DrawingStyle) -> Self {
        Self { points, style }
    }
}

impl AnnotationShape for PencilDrawing {
    fn center(&self) -> Point {
        self.bounding_box()
            .map(|bbox| bbox.center)
            .unwrap_or_default()
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points, 0.0)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.points
            .windows(2)
            .any(|seg| distance_to_segment(point, seg[0], seg[1]) <= tolerance)
    }

    fn is_complete(&self) -> bool {
        self.points.len() >= 2
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.offset(dx, dy)).collect(),
            style: self.style.clone(),
        }
    }

    fn rotated(&self, angle_delta: f64) -> Self {
        let center = self.center();
        Self {
            points: self
                .points
                .iter()
                .map(|p| rotate_point(*p, center, angle_delta))
                .collect(),
            style: self.style.clone(),
        }
    }

    fn scaled_from(&self, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| scale_point(*p, anchor, angle, scale_x, scale_y))
                .collect(),
            style: self.style.clone(),
        }
    }
}
