use serde::{Deserialize, Serialize};

use chartmark_core::constants::{
    DEFAULT_TEXT, DEFAULT_TEXT_FONT, MIN_GLYPH_SIZE, TEXT_CHAR_WIDTH, TEXT_LINE_HEIGHT,
};
use chartmark_core::{scale_point, BoundingBox, Point};

use super::{glyph_scale, unrotate, AnnotationShape, DrawingStyle};
use crate::font::{font_size_px, with_font_size};
use crate::surface::TextBaseline;

/// Text label anchored at `(x, y)`.
///
/// The anchor is both the top-left of the un-rotated glyph box and the pivot
/// for rotation, so a rotated label swings around its first character rather
/// than its middle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDrawing {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub text: String,
    /// CSS font shorthand, e.g. `"12px/1 sans-serif"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_baseline: Option<TextBaseline>,
    #[serde(default, deserialize_with = "super::angle_or_zero")]
    pub angle: f64,
    #[serde(flatten)]
    pub style: DrawingStyle,
}

impl Default for TextDrawing {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            text: DEFAULT_TEXT.to_string(),
            font: None,
            text_baseline: None,
            angle: 0.0,
            style: DrawingStyle::default(),
        }
    }
}

impl TextDrawing {
    /// Label placed at `pos` with `text`, falling back to the default caption
    /// when `text` is empty.
    pub fn at(pos: Point, text: impl Into<String>, style: DrawingStyle) -> Self {
        let text = text.into();
        Self {
            x: Some(pos.x),
            y: Some(pos.y),
            text: if text.is_empty() {
                DEFAULT_TEXT.to_string()
            } else {
                text
            },
            font: None,
            text_baseline: None,
            angle: 0.0,
            style,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }

    pub fn font(&self) -> &str {
        self.font.as_deref().unwrap_or(DEFAULT_TEXT_FONT)
    }

    pub fn baseline(&self) -> TextBaseline {
        self.text_baseline.unwrap_or(TextBaseline::Top)
    }

    /// Estimated glyph box size: a fixed advance per character and a single
    /// line height. Empty text still occupies one character cell.
    pub fn estimated_size(&self) -> (f64, f64) {
        let chars = self.text.chars().count().max(1);
        (chars as f64 * TEXT_CHAR_WIDTH, TEXT_LINE_HEIGHT)
    }

    fn at_anchor(&self, anchor: Option<Point>) -> Self {
        Self {
            x: anchor.map(|p| p.x).or(self.x),
            y: anchor.map(|p| p.y).or(self.y),
            ..self.clone()
        }
    }
}

impl AnnotationShape for TextDrawing {
    fn center(&self) -> Point {
        self.anchor().unwrap_or_default()
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        let anchor = self.anchor()?;
        let (width, height) = self.estimated_size();
        Some(BoundingBox::rotated_rect(
            anchor, width, height, anchor, self.angle,
        ))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let Some(anchor) = self.anchor() else {
            return false;
        };
        let (width, height) = self.estimated_size();
        let p = unrotate(point, anchor, self.angle);
        p.x >= anchor.x - tolerance
            && p.x <= anchor.x + width + tolerance
            && p.y >= anchor.y - tolerance
            && p.y <= anchor.y + height + tolerance
    }

    fn is_complete(&self) -> bool {
        self.anchor().is_some()
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        self.at_anchor(self.anchor().map(|p| p.offset(dx, dy)))
    }

    fn rotated(&self, angle_delta: f64) -> Self {
        Self {
            angle: self.angle + angle_delta,
            ..self.clone()
        }
    }

    fn scaled_from(&self, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Self {
        let font = self.font();
        let size = (font_size_px(font) * glyph_scale(scale_x, scale_y)).max(MIN_GLYPH_SIZE);
        let moved = self
            .anchor()
            .map(|p| scale_point(p, anchor, angle, scale_x, scale_y));
        Self {
            font: Some(with_font_size(font, size)),
            ..self.at_anchor(moved)
        }
    }
}
