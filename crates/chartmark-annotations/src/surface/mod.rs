//! Rendering surface abstraction.
//!
//! [`Surface`] is the subset of a 2D canvas context the render dispatch needs.
//! Coordinates are surface pixels; `translate`/`rotate` compose onto the
//! current transform and `save`/`restore` scope every piece of drawing state.

use serde::{Deserialize, Serialize};

mod color;
mod pixmap;
mod recording;

pub use color::parse_color;
pub use pixmap::PixmapSurface;
pub use recording::{RecordingSurface, SurfaceCommand};

/// Vertical alignment of text relative to its draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Alphabetic,
    Bottom,
}

/// Horizontal alignment of text relative to its draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

pub trait Surface {
    /// Wipes the whole surface in device space, ignoring the current transform.
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);
    /// Rotates the coordinate frame by `angle` radians.
    fn rotate(&mut self, angle: f64);

    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_line_width(&mut self, width: f64);
    /// An empty slice restores solid lines.
    fn set_line_dash(&mut self, dash: &[f64]);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Adds a full axis-aligned ellipse centered on `(cx, cy)` as a closed
    /// subpath.
    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Adds a closed axis-aligned rectangle subpath.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.close_path();
    }
}
