use serde::{Deserialize, Serialize};

use chartmark_core::constants::{DEFAULT_ICON, DEFAULT_ICON_SIZE, MIN_GLYPH_SIZE};
use chartmark_core::{scale_point, BoundingBox, Point};

use super::{glyph_scale, unrotate, AnnotationShape, DrawingStyle};

/// Single glyph (typically an emoji) centered on `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDrawing {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Glyph size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, deserialize_with = "super::angle_or_zero")]
    pub angle: f64,
    #[serde(flatten)]
    pub style: DrawingStyle,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Default for IconDrawing {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            icon: default_icon(),
            size: None,
            angle: 0.0,
            style: DrawingStyle::default(),
        }
    }
}

impl IconDrawing {
    pub fn at(pos: Point, icon: impl Into<String>, size: Option<f64>, style: DrawingStyle) -> Self {
        let icon = icon.into();
        Self {
            x: Some(pos.x),
            y: Some(pos.y),
            icon: if icon.is_empty() { default_icon() } else { icon },
            size: Some(size.unwrap_or(DEFAULT_ICON_SIZE)),
            angle: 0.0,
            style,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }

    pub fn size(&self) -> f64 {
        self.size.unwrap_or(DEFAULT_ICON_SIZE)
    }
}

impl AnnotationShape for IconDrawing {
    fn center(&self) -> Point {
        self.anchor().unwrap_or_default()
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        let anchor = self.anchor()?;
        let size = self.size();
        let origin = anchor.offset(-size / 2.0, -size / 2.0);
        Some(BoundingBox::rotated_rect(
            origin, size, size, anchor, self.angle,
        ))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let Some(anchor) = self.anchor() else {
            return false;
        };
        let half = self.size() / 2.0 + tolerance;
        let p = unrotate(point, anchor, self.angle);
        (p.x - anchor.x).abs() <= half && (p.y - anchor.y).abs() <= half
    }

    fn is_complete(&self) -> bool {
        self.anchor().is_some()
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        match self.anchor() {
            Some(p) => Self {
                x: Some(p.x + dx),
                y: Some(p.y + dy),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    fn rotated(&self, angle_delta: f64) -> Self {
        Self {
            angle: self.angle + angle_delta,
            ..self.clone()
        }
    }

    fn scaled_from(&self, anchor: Point, angle: f64, scale_x: f64, scale_y: f64) -> Self {
        let size = (self.size() * glyph_scale(scale_x, scale_y)).max(MIN_GLYPH_SIZE);
        let moved = self
            .anchor()
            .map(|p| scale_point(p, anchor, angle, scale_x, scale_y));
        Self {
            x: moved.map(|p| p.x).or(self.x),
            y: moved.map(|p| p.y).or(self.y),
            size: Some(size),
            ..self.clone()
        }
    }
}
