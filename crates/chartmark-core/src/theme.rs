//! Default styling applied when a drawing omits its own.

use serde::{Deserialize, Serialize};

/// Colors used whenever a shape carries no styling of its own.
///
/// Values are CSS color strings; the theme is passed explicitly to style
/// resolution and rendering rather than read from global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Stroke color for shapes and pointer drafts.
    pub stroke: String,
    /// Fill given to new rectangles, ellipses and arrowheads.
    pub fill: String,
    /// Text and icon color.
    pub text: String,
    /// Accent for projection lines and their labels.
    pub projection: String,
    /// Outline and handle color of the selection overlay.
    pub selection: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            stroke: "#38bdf8".to_string(),
            fill: "rgba(56, 189, 248, 0.15)".to_string(),
            text: "#e2e8f0".to_string(),
            projection: "#f59e0b".to_string(),
            selection: "#38bdf8".to_string(),
        }
    }
}
