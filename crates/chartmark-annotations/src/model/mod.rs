//! Annotation shape model.
//!
//! Every annotation is one [`Drawing`] variant. Each variant implements
//! [`AnnotationShape`], and `Drawing` forwards to the variant with an
//! exhaustive match, so adding a variant fails the build until every
//! capability is supplied for it.
//!
//! Transforms are copy-on-write: they return a new value and never mutate the
//! receiver.

use serde::{Deserialize, Deserializer, Serialize};

use chartmark_core::{rotate_point, scale_point, BoundingBox, Point};

mod arrow;
mod ellipse;
mod icon;
mod line;
mod pencil;
mod projection;
mod rectangle;
mod text;

pub use arrow::ArrowDrawing;
pub use ellipse::EllipseDrawing;
pub use icon::IconDrawing;
pub use line::LineDrawing;
pub use pencil::PencilDrawing;
pub use projection::ProjectionDrawing;
pub use rectangle::RectangleDrawing;
pub use text::TextDrawing;

/// Styling every variant may carry. Absent fields fall back to the theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawingStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Vec<f64>>,
}

impl DrawingStyle {
    pub fn stroked(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: Some(color.into()),
            width: Some(width),
            ..Default::default()
        }
    }
}

/// Capabilities every annotation variant supplies.
pub trait AnnotationShape {
    /// Pivot used by rotation.
    fn center(&self) -> Point;

    /// Box around the shape, or `None` when required geometry is missing.
    fn bounding_box(&self) -> Option<BoundingBox>;

    /// Whether `point` lies within `tolerance` of the shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Whether the shape has the geometry it needs to be drawn or picked.
    fn is_complete(&self) -> bool;

    fn translated(&self, dx: f64, dy: f64) -> Self
    where
        Self: Sized;

    /// Rotates by `angle_delta` radians about [`AnnotationShape::center`].
    fn rotated(&self, angle_delta: f64) -> Self
    where
        Self: Sized;

    /// Resizes relative to `anchor`, scaling along the axes of the frame
    /// rotated by `angle`. The caller clamps the factors.
    fn scaled_from(&self, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Self
    where
        Self: Sized;
}

/// Variant tag of a [`Drawing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingKind {
    Pencil,
    Line,
    Arrow,
    Rectangle,
    Ellipse,
    Text,
    Icon,
    Projection,
}

impl DrawingKind {
    /// Point-set variants rotate by moving their points; the rest rotate by
    /// accumulating an angle about a fixed frame.
    pub fn rotates_points(self) -> bool {
        match self {
            DrawingKind::Pencil
            | DrawingKind::Line
            | DrawingKind::Arrow
            | DrawingKind::Projection => true,
            DrawingKind::Rectangle
            | DrawingKind::Ellipse
            | DrawingKind::Text
            | DrawingKind::Icon => false,
        }
    }
}

impl std::fmt::Display for DrawingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DrawingKind::Pencil => "pencil",
            DrawingKind::Line => "line",
            DrawingKind::Arrow => "arrow",
            DrawingKind::Rectangle => "rectangle",
            DrawingKind::Ellipse => "ellipse",
            DrawingKind::Text => "text",
            DrawingKind::Icon => "icon",
            DrawingKind::Projection => "projection",
        };
        f.write_str(name)
    }
}

/// One annotation on the chart surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Drawing {
    Pencil(PencilDrawing),
    #[serde(alias = "segment")]
    Line(LineDrawing),
    Arrow(ArrowDrawing),
    Rectangle(RectangleDrawing),
    Ellipse(EllipseDrawing),
    Text(TextDrawing),
    Icon(IconDrawing),
    Projection(ProjectionDrawing),
}

impl AnnotationShape for Drawing {
    fn center(&self) -> Point {
        match self {
            Drawing::Pencil(d) => d.center(),
            Drawing::Line(d) => d.center(),
            Drawing::Arrow(d) => d.center(),
            Drawing::Rectangle(d) => d.center(),
            Drawing::Ellipse(d) => d.center(),
            Drawing::Text(d) => d.center(),
            Drawing::Icon(d) => d.center(),
            Drawing::Projection(d) => d.center(),
        }
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Drawing::Pencil(d) => d.bounding_box(),
            Drawing::Line(d) => d.bounding_box(),
            Drawing::Arrow(d) => d.bounding_box(),
            Drawing::Rectangle(d) => d.bounding_box(),
            Drawing::Ellipse(d) => d.bounding_box(),
            Drawing::Text(d) => d.bounding_box(),
            Drawing::Icon(d) => d.bounding_box(),
            Drawing::Projection(d) => d.bounding_box(),
        }
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Drawing::Pencil(d) => d.hit_test(point, tolerance),
            Drawing::Line(d) => d.hit_test(point, tolerance),
            Drawing::Arrow(d) => d.hit_test(point, tolerance),
            Drawing::Rectangle(d) => d.hit_test(point, tolerance),
            Drawing::Ellipse(d) => d.hit_test(point, tolerance),
            Drawing::Text(d) => d.hit_test(point, tolerance),
            Drawing::Icon(d) => d.hit_test(point, tolerance),
            Drawing::Projection(d) => d.hit_test(point, tolerance),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            Drawing::Pencil(d) => d.is_complete(),
            Drawing::Line(d) => d.is_complete(),
            Drawing::Arrow(d) => d.is_complete(),
            Drawing::Rectangle(d) => d.is_complete(),
            Drawing::Ellipse(d) => d.is_complete(),
            Drawing::Text(d) => d.is_complete(),
            Drawing::Icon(d) => d.is_complete(),
            Drawing::Projection(d) => d.is_complete(),
        }
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        match self {
            Drawing::Pencil(d) => Drawing::Pencil(d.translated(dx, dy)),
            Drawing::Line(d) => Drawing::Line(d.translated(dx, dy)),
            Drawing::Arrow(d) => Drawing::Arrow(d.translated(dx, dy)),
            Drawing::Rectangle(d) => Drawing::Rectangle(d.translated(dx, dy)),
            Drawing::Ellipse(d) => Drawing::Ellipse(d.translated(dx, dy)),
            Drawing::Text(d) => Drawing::Text(d.translated(dx, dy)),
            Drawing::Icon(d) => Drawing::Icon(d.translated(dx, dy)),
            Drawing::Projection(d) => Drawing::Projection(d.translated(dx, dy)),
        }
    }

    fn rotated(&self, angle_delta: f64) -> Self {
        match self {
            Drawing::Pencil(d) => Drawing::Pencil(d.rotated(angle_delta)),
            Drawing::Line(d) => Drawing::Line(d.rotated(angle_delta)),
            Drawing::Arrow(d) => Drawing::Arrow(d.rotated(angle_delta)),
            Drawing::Rectangle(d) => Drawing::Rectangle(d.rotated(angle_delta)),
            Drawing::Ellipse(d) => Drawing::Ellipse(d.rotated(angle_delta)),
            Drawing::Text(d) => Drawing::Text(d.rotated(angle_delta)),
            Drawing::Icon(d) => Drawing::Icon(d.rotated(angle_delta)),
            Drawing::Projection(d) => Drawing::Projection(d.rotated(angle_delta)),
        }
    }

    fn scaled_from(&self, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Self {
        match self {
            Drawing::Pencil(d) => Drawing::Pencil(d.scaled_from(anchor, angle, scale_x, scale_y)),
            Drawing::Line(d) => Drawing::Line(d.scaled_from(anchor, angle, scale_x, scale_y)),
            Drawing::Arrow(d) => Drawing::Arrow(d.scaled_from(anchor, angle, scale_x, scale_y)),
            Drawing::Rectangle(d) => {
                Drawing::Rectangle(d.scaled_from(anchor, angle, scale_x, scale_y))
            }
            Drawing::Ellipse(d) => Drawing::Ellipse(d.scaled_from(anchor, angle, scale_x, scale_y)),
            Drawing::Text(d) => Drawing::Text(d.scaled_from(anchor, angle, scale_x, scale_y)),
            Drawing::Icon(d) => Drawing::Icon(d.scaled_from(anchor, angle, scale_x, scale_y)),
            Drawing::Projection(d) => {
                Drawing::Projection(d.scaled_from(anchor, angle, scale_x, scale_y))
            }
        }
    }
}

impl Drawing {
    pub fn kind(&self) -> DrawingKind {
        match self {
            Drawing::Pencil(_) => DrawingKind::Pencil,
            Drawing::Line(_) => DrawingKind::Line,
            Drawing::Arrow(_) => DrawingKind::Arrow,
            Drawing::Rectangle(_) => DrawingKind::Rectangle,
            Drawing::Ellipse(_) => DrawingKind::Ellipse,
            Drawing::Text(_) => DrawingKind::Text,
            Drawing::Icon(_) => DrawingKind::Icon,
            Drawing::Projection(_) => DrawingKind::Projection,
        }
    }

    pub fn style(&self) -> &DrawingStyle {
        match self {
            Drawing::Pencil(d) => &d.style,
            Drawing::Line(d) => &d.style,
            Drawing::Arrow(d) => &d.style,
            Drawing::Rectangle(d) => &d.style,
            Drawing::Ellipse(d) => &d.style,
            Drawing::Text(d) => &d.style,
            Drawing::Icon(d) => &d.style,
            Drawing::Projection(d) => &d.style,
        }
    }

    /// Frame rotation in radians. Point-set variants bake rotation into their
    /// points and always report 0.
    pub fn angle(&self) -> f64 {
        match self {
            Drawing::Pencil(_) | Drawing::Line(_) | Drawing::Arrow(_) | Drawing::Projection(_) => {
                0.0
            }
            Drawing::Rectangle(d) => d.angle,
            Drawing::Ellipse(d) => d.angle,
            Drawing::Text(d) => d.angle,
            Drawing::Icon(d) => d.angle,
        }
    }
}

impl From<PencilDrawing> for Drawing {
    fn from(d: PencilDrawing) -> Self {
        Drawing::Pencil(d)
    }
}

impl From<LineDrawing> for Drawing {
    fn from(d: LineDrawing) -> Self {
        Drawing::Line(d)
    }
}

impl From<ArrowDrawing> for Drawing {
    fn from(d: ArrowDrawing) -> Self {
        Drawing::Arrow(d)
    }
}

impl From<RectangleDrawing> for Drawing {
    fn from(d: RectangleDrawing) -> Self {
        Drawing::Rectangle(d)
    }
}

impl From<EllipseDrawing> for Drawing {
    fn from(d: EllipseDrawing) -> Self {
        Drawing::Ellipse(d)
    }
}

impl From<TextDrawing> for Drawing {
    fn from(d: TextDrawing) -> Self {
        Drawing::Text(d)
    }
}

impl From<IconDrawing> for Drawing {
    fn from(d: IconDrawing) -> Self {
        Drawing::Icon(d)
    }
}

impl From<ProjectionDrawing> for Drawing {
    fn from(d: ProjectionDrawing) -> Self {
        Drawing::Projection(d)
    }
}

// Helpers shared by the start/end variants. Missing endpoints stay missing
// through every transform.

/// Reads a stored angle, treating `null` as unrotated.
pub(crate) fn angle_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

pub(crate) fn endpoints(start: Option<Point>, end: Option<Point>) -> Option<(Point, Point)> {
    Some((start?, end?))
}

/// Midpoint with absent endpoints read as the origin.
pub(crate) fn segment_center(start: Option<Point>, end: Option<Point>) -> Point {
    start.unwrap_or_default().midpoint(&end.unwrap_or_default())
}

pub(crate) fn segment_bounds(start: Option<Point>, end: Option<Point>) -> Option<BoundingBox> {
    let (a, b) = endpoints(start, end)?;
    BoundingBox::from_points(&[a, b], 0.0)
}

pub(crate) fn shift(p: Option<Point>, dx: f64, dy: f64) -> Option<Point> {
    p.map(|p| p.offset(dx, dy))
}

pub(crate) fn spin(p: Option<Point>, center: Point, angle: f64) -> Option<Point> {
    p.map(|p| rotate_point(p, center, angle))
}

pub(crate) fn stretch(
    p: Option<Point>,
    anchor: Point,
    angle: f64,
    scale_x: f64,
    scale_y: f64,
) -> Option<Point> {
    p.map(|p| scale_point(p, anchor, angle, scale_x, scale_y))
}

/// Resizes a box stored as opposite pre-rotation corners.
///
/// The center follows the anchor-relative mapping and the half-extents scale
/// along the box's own axes, so with `angle` equal to the box's rotation the
/// corner sitting on `anchor` stays on it.
pub(crate) fn stretch_box(
    start: Point,
    end: Point,
    anchor: Point,
    angle: f64,
    scale_x: f64,
    scale_y: f64,
) -> (Point, Point) {
    let center = start.midpoint(&end);
    let moved = scale_point(center, anchor, angle, scale_x, scale_y);
    let place = |p: Point| {
        Point::new(
            moved.x + (p.x - center.x) * scale_x,
            moved.y + (p.y - center.y) * scale_y,
        )
    };
    (place(start), place(end))
}

/// Test point for a frame-rotated shape: `point` taken into the frame's
/// un-rotated space about `pivot`.
pub(crate) fn unrotate(point: Point, pivot: Point, angle: f64) -> Point {
    if angle != 0.0 {
        rotate_point(point, pivot, -angle)
    } else {
        point
    }
}

/// Average magnitude of a scale pair, used for glyph-sized shapes.
pub(crate) fn glyph_scale(scale_x: f64, scale_y: f64) -> f64 {
    let avg = (scale_x.abs() + scale_y.abs()) / 2.0;
    if avg == 0.0 || !avg.is_finite() {
        1.0
    } else {
        avg
    }
}
