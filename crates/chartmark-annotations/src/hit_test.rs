//! Point picking over single shapes and drawing lists.

use chartmark_core::Point;
use tracing::trace;

use crate::model::{AnnotationShape, Drawing};

/// Whether `point` lies on `drawing` within `tolerance`. Incomplete shapes
/// never match.
pub fn is_point_on_drawing(point: Point, drawing: &Drawing, tolerance: f64) -> bool {
    drawing.is_complete() && drawing.hit_test(point, tolerance)
}

/// Index of the topmost (most recently added) shape under `point`.
pub fn topmost_hit(drawings: &[Drawing], point: Point, tolerance: f64) -> Option<usize> {
    let found = drawings
        .iter()
        .rposition(|d| is_point_on_drawing(point, d, tolerance));
    trace!(
        "hit test at ({:.1}, {:.1}) tol {} -> {:?}",
        point.x,
        point.y,
        tolerance,
        found
    );
    found
}
