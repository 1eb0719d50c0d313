//! Resolution of per-shape styling against a [`Theme`].

use chartmark_core::constants::{DEFAULT_LINE_WIDTH, PROJECTION_DASH};
use chartmark_core::Theme;

use crate::model::{Drawing, DrawingStyle};

/// Concrete paint settings for one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub stroke: String,
    /// Fill for closed paths; `None` leaves them hollow.
    pub fill: Option<String>,
    /// Color of glyphs and labels.
    pub ink: String,
    pub opacity: f64,
    pub line_width: f64,
    pub dash: Option<Vec<f64>>,
}

/// Fills every absent style field of `drawing` from `theme`.
pub fn resolve_style(drawing: &Drawing, theme: &Theme) -> ResolvedStyle {
    let style = drawing.style();
    match drawing {
        Drawing::Pencil(_)
        | Drawing::Line(_)
        | Drawing::Arrow(_)
        | Drawing::Rectangle(_)
        | Drawing::Ellipse(_) => base(style, &theme.stroke, &theme.text, style.dash.clone()),
        Drawing::Text(_) | Drawing::Icon(_) => base(style, &theme.stroke, &theme.text, None),
        Drawing::Projection(_) => {
            let dash = style
                .dash
                .clone()
                .unwrap_or_else(|| PROJECTION_DASH.to_vec());
            base(style, &theme.projection, &theme.projection, Some(dash))
        }
    }
}

fn base(
    style: &DrawingStyle,
    default_stroke: &str,
    default_ink: &str,
    dash: Option<Vec<f64>>,
) -> ResolvedStyle {
    let color = style.color.as_deref().filter(|c| !c.is_empty());
    ResolvedStyle {
        stroke: color.unwrap_or(default_stroke).to_string(),
        fill: style.fill.clone().filter(|f| !f.is_empty()),
        ink: color.unwrap_or(default_ink).to_string(),
        opacity: style
            .opacity
            .filter(|o| o.is_finite())
            .map_or(1.0, |o| o.clamp(0.0, 1.0)),
        line_width: style
            .width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_LINE_WIDTH),
        dash,
    }
}
