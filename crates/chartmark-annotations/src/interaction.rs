//! Pointer-interaction helpers.
//!
//! The host owns every value here and feeds pointer positions in surface
//! space. Sessions reference shapes by list index and end as soon as that
//! index stops resolving.

use chartmark_core::constants::{
    DEFAULT_HEAD_LENGTH, DEFAULT_HEAD_WIDTH, DEFAULT_LINE_WIDTH, DEFAULT_PROJECTION_LABEL,
};
use chartmark_core::{rotate_point, BoundingBox, Point, Theme};
use tracing::trace;

use crate::manager::DrawingManager;
use crate::model::{
    AnnotationShape, ArrowDrawing, Drawing, DrawingStyle, EllipseDrawing, LineDrawing,
    PencilDrawing, ProjectionDrawing, RectangleDrawing,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// A corner resize handle and the opposite corner that stays put while it is
/// dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub corner: Corner,
    pub point: Point,
    pub anchor: Point,
}

/// The four handles of `bbox`, in corner order.
pub fn handles(bbox: &BoundingBox) -> [Handle; 4] {
    let c = &bbox.corners;
    [
        Handle {
            corner: Corner::TopLeft,
            point: c[0],
            anchor: c[2],
        },
        Handle {
            corner: Corner::TopRight,
            point: c[1],
            anchor: c[3],
        },
        Handle {
            corner: Corner::BottomRight,
            point: c[2],
            anchor: c[0],
        },
        Handle {
            corner: Corner::BottomLeft,
            point: c[3],
            anchor: c[1],
        },
    ]
}

/// First handle of `bbox` within `tolerance` of `pos`.
pub fn hit_handle(bbox: &BoundingBox, pos: Point, tolerance: f64) -> Option<Handle> {
    handles(bbox)
        .into_iter()
        .find(|h| h.point.distance_to(&pos) <= tolerance)
}

/// State captured when a resize drag starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub corner: Corner,
    pub anchor: Point,
    /// Rotation of the box being resized.
    pub angle: f64,
    pub start_width: f64,
    pub start_height: f64,
    /// The shape as it was when the drag began; every update scales this.
    pub base: Drawing,
}

impl ResizeSession {
    fn start(drawing: &Drawing, bbox: &BoundingBox, handle: Handle) -> Self {
        let local = rotate_point(handle.point, handle.anchor, -bbox.angle);
        Self {
            corner: handle.corner,
            anchor: handle.anchor,
            angle: bbox.angle,
            start_width: (local.x - handle.anchor.x).abs().max(1.0),
            start_height: (local.y - handle.anchor.y).abs().max(1.0),
            base: drawing.clone(),
        }
    }

    /// Scale factors that put the dragged corner at `pos`, never shrinking the
    /// box below `min_size` along either axis.
    pub fn scale_for(&self, pos: Point, min_size: f64) -> (f64, f64) {
        let local = rotate_point(pos, self.anchor, -self.angle);
        let width = (local.x - self.anchor.x).abs().max(min_size);
        let height = (local.y - self.anchor.y).abs().max(min_size);
        (width / self.start_width, height / self.start_height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GrabMode {
    Move,
    Rotate,
    Resize(ResizeSession),
}

/// An in-progress grab-tool drag on one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GrabSession {
    pub index: usize,
    pub mode: GrabMode,
    pub last_pos: Point,
}

impl GrabSession {
    /// Starts a grab at `pos`.
    ///
    /// A resize handle of the current selection takes priority. Otherwise the
    /// topmost shape under `pos` is picked and either resized (when `pos` is
    /// on one of its handles), rotated (when `rotate` is set) or moved.
    /// Returns `None` when nothing is under the pointer, which the caller
    /// treats as clearing its selection.
    pub fn begin(
        manager: &DrawingManager,
        selected: Option<usize>,
        pos: Point,
        tolerance: f64,
        rotate: bool,
    ) -> Option<Self> {
        let try_resize = |index: usize| -> Option<Self> {
            let drawing = manager.get(index)?;
            let bbox = drawing.bounding_box()?;
            let handle = hit_handle(&bbox, pos, tolerance)?;
            trace!("Resize grab on drawing {} at {:?}", index, handle.corner);
            Some(Self {
                index,
                mode: GrabMode::Resize(ResizeSession::start(drawing, &bbox, handle)),
                last_pos: pos,
            })
        };

        if let Some(session) = selected.and_then(&try_resize) {
            return Some(session);
        }

        let hit = manager.hit_test(pos, tolerance)?;
        if let Some(session) = try_resize(hit.index) {
            return Some(session);
        }
        Some(Self {
            index: hit.index,
            mode: if rotate {
                GrabMode::Rotate
            } else {
                GrabMode::Move
            },
            last_pos: pos,
        })
    }

    /// Applies a pointer move and returns the updated shape, or `None` once
    /// the target index no longer exists.
    pub fn update<'m>(
        &mut self,
        manager: &'m mut DrawingManager,
        pos: Point,
        min_size: f64,
    ) -> Option<&'m Drawing> {
        let center = manager.get(self.index)?.center();
        let last = self.last_pos;
        self.last_pos = pos;
        match &self.mode {
            GrabMode::Resize(resize) => {
                let (sx, sy) = resize.scale_for(pos, min_size);
                manager.resize_to(
                    self.index,
                    Some(&resize.base),
                    resize.anchor,
                    resize.angle,
                    sx,
                    sy,
                )
            }
            GrabMode::Move => manager.translate(self.index, pos.x - last.x, pos.y - last.y),
            GrabMode::Rotate => {
                let prev = (last.y - center.y).atan2(last.x - center.x);
                let next = (pos.y - center.y).atan2(pos.x - center.x);
                let delta = next - prev;
                if delta.is_finite() {
                    manager.rotate(self.index, delta)
                } else {
                    manager.get(self.index)
                }
            }
        }
    }
}

/// Drag-to-draw tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Pencil,
    Line,
    Arrow,
    Rectangle,
    Ellipse,
    Projection,
}

impl Tool {
    /// Looks a tool up by its host-facing name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pencil" => Some(Tool::Pencil),
            "line" | "segment" => Some(Tool::Line),
            "arrow" => Some(Tool::Arrow),
            "rectangle" => Some(Tool::Rectangle),
            "ellipse" => Some(Tool::Ellipse),
            "projection" => Some(Tool::Projection),
            _ => None,
        }
    }
}

/// Per-tool overrides. Absent values fall back to the theme and defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolOptions {
    pub color: Option<String>,
    pub width: Option<f64>,
    pub fill: Option<String>,
    pub dash: Option<Vec<f64>>,
    pub head_length: Option<f64>,
    pub head_width: Option<f64>,
    pub label: Option<String>,
}

/// A shape being drawn by a pointer drag, not yet in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub tool: Tool,
    pub start: Point,
    pub current: Point,
    pub points: Vec<Point>,
    pub options: ToolOptions,
}

impl Draft {
    pub fn begin(tool: Tool, pos: Point, options: ToolOptions) -> Self {
        Self {
            tool,
            start: pos,
            current: pos,
            points: vec![pos],
            options,
        }
    }

    /// Pencil drafts collect every position; the others track the latest.
    pub fn extend(&mut self, pos: Point) {
        match self.tool {
            Tool::Pencil => self.points.push(pos),
            _ => self.current = pos,
        }
    }

    /// The shape this draft would commit, styled from `theme` where the
    /// options are silent.
    pub fn to_drawing(&self, theme: &Theme) -> Drawing {
        let opts = &self.options;
        let color = non_empty(&opts.color).unwrap_or(theme.stroke.as_str()).to_string();
        let width = positive_or(opts.width, DEFAULT_LINE_WIDTH);
        let fill = non_empty(&opts.fill).unwrap_or(theme.fill.as_str()).to_string();
        let stroked = DrawingStyle::stroked(color, width);
        let filled = DrawingStyle {
            fill: Some(fill),
            ..stroked.clone()
        };
        let (start, end) = (self.start, self.current);

        match self.tool {
            Tool::Pencil => PencilDrawing::new(self.points.clone(), stroked).into(),
            Tool::Line => LineDrawing::new(
                start,
                end,
                DrawingStyle {
                    dash: opts.dash.clone(),
                    ..stroked
                },
            )
            .into(),
            Tool::Arrow => ArrowDrawing {
                head_length: Some(positive_or(opts.head_length, DEFAULT_HEAD_LENGTH)),
                head_width: Some(positive_or(opts.head_width, DEFAULT_HEAD_WIDTH)),
                ..ArrowDrawing::new(start, end, filled)
            }
            .into(),
            Tool::Rectangle => RectangleDrawing::new(start, end, filled).into(),
            Tool::Ellipse => EllipseDrawing::new(start, end, filled).into(),
            Tool::Projection => {
                let color = non_empty(&opts.color)
                    .unwrap_or(theme.projection.as_str())
                    .to_string();
                let label = non_empty(&opts.label)
                    .unwrap_or(DEFAULT_PROJECTION_LABEL)
                    .to_string();
                ProjectionDrawing::new(
                    start,
                    end,
                    Some(label),
                    DrawingStyle {
                        dash: opts.dash.clone(),
                        ..DrawingStyle::stroked(color, width)
                    },
                )
                .into()
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn positive_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| *v > 0.0).unwrap_or(default)
}
