//! Shared constants for hit testing, resizing and default styling.

/// Default pick radius, in surface pixels, for hit tests and erasing.
pub const HIT_TOLERANCE: f64 = 8.0;

/// Pick radius for the corner resize handles of a selection.
pub const HANDLE_TOLERANCE: f64 = 10.0;

/// Smallest width/height a resize drag may produce.
pub const MIN_SIZE: f64 = 8.0;

/// Floor for scaled font sizes and icon sizes.
pub const MIN_GLYPH_SIZE: f64 = 4.0;

/// Estimated glyph advance used by the text hit box (fixed-width approximation).
pub const TEXT_CHAR_WIDTH: f64 = 8.0;

/// Estimated line height used by the text hit box.
pub const TEXT_LINE_HEIGHT: f64 = 16.0;

pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_ICON_SIZE: f64 = 16.0;
pub const DEFAULT_HEAD_LENGTH: f64 = 10.0;
pub const DEFAULT_HEAD_WIDTH: f64 = 4.0;

pub const DEFAULT_TEXT_FONT: &str = "12px/1 sans-serif";
pub const DEFAULT_LABEL_FONT: &str = "11px/1 sans-serif";
pub const DEFAULT_TEXT: &str = "Note";
pub const DEFAULT_ICON: &str = "\u{1F600}";
pub const DEFAULT_PROJECTION_LABEL: &str = "Projection";

/// Dash pattern applied to projection lines that carry none of their own.
pub const PROJECTION_DASH: [f64; 2] = [8.0, 6.0];

/// Offset of a projection label from the line's end point.
pub const PROJECTION_LABEL_OFFSET: (f64, f64) = (6.0, -6.0);

/// Side length of the square handles drawn on a selection outline.
pub const SELECTION_HANDLE_SIZE: f64 = 8.0;
pub const SELECTION_DASH: [f64; 2] = [6.0, 4.0];
