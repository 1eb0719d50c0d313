//! Copy-on-write transforms over [`Drawing`] values.
//!
//! These are thin entry points over [`AnnotationShape`]; the drawing-list
//! manager commits their results back into its list.

use chartmark_core::Point;

use crate::model::{AnnotationShape, Drawing};

pub fn translate(drawing: &Drawing, dx: f64, dy: f64) -> Drawing {
    drawing.translated(dx, dy)
}

/// Rotates about the shape's center. Point-set variants move their points;
/// box-frame variants accumulate into `angle`.
pub fn rotate(drawing: &Drawing, angle_delta: f64) -> Drawing {
    drawing.rotated(angle_delta)
}

/// Resizes about `anchor` in the frame rotated by `angle`. Factors are used
/// as given; size floors are the caller's job.
pub fn scale_from(drawing: &Drawing, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Drawing {
    drawing.scaled_from(anchor, angle, scale_x, scale_y)
}
