//! Render dispatch: paints annotations onto a [`Surface`].
//!
//! Every draw routine scopes its state changes in `save`/`restore` and skips
//! shapes that lack the geometry they need. Box-frame variants paint through
//! the surface transform (`translate` then `rotate`); point-set variants paint
//! their points directly.

use std::f64::consts::PI;

use chartmark_core::constants::{
    DEFAULT_ICON, DEFAULT_LABEL_FONT, DEFAULT_TEXT, PROJECTION_LABEL_OFFSET, SELECTION_DASH,
    SELECTION_HANDLE_SIZE,
};
use chartmark_core::{BoundingBox, Theme};

use crate::model::{
    ArrowDrawing, Drawing, EllipseDrawing, IconDrawing, LineDrawing, PencilDrawing,
    ProjectionDrawing, RectangleDrawing, TextDrawing,
};
use crate::style::{resolve_style, ResolvedStyle};
use crate::surface::{Surface, TextAlign, TextBaseline};

/// Paints one shape.
pub fn draw_drawing(surface: &mut dyn Surface, drawing: &Drawing, theme: &Theme) {
    let style = resolve_style(drawing, theme);
    match drawing {
        Drawing::Pencil(d) => draw_pencil(surface, d, &style),
        Drawing::Line(d) => draw_line(surface, d, &style),
        Drawing::Arrow(d) => draw_arrow(surface, d, &style),
        Drawing::Rectangle(d) => draw_rectangle(surface, d, &style),
        Drawing::Ellipse(d) => draw_ellipse(surface, d, &style),
        Drawing::Text(d) => draw_text(surface, d, &style),
        Drawing::Icon(d) => draw_icon(surface, d, &style),
        Drawing::Projection(d) => draw_projection(surface, d, &style),
    }
}

fn apply_stroke_and_fill(surface: &mut dyn Surface, style: &ResolvedStyle) {
    surface.set_global_alpha(style.opacity);
    surface.set_stroke_color(&style.stroke);
    surface.set_line_width(style.line_width);
    if let Some(dash) = &style.dash {
        surface.set_line_dash(dash);
    }
    if let Some(fill) = &style.fill {
        surface.set_fill_color(fill);
    }
}

pub fn draw_pencil(surface: &mut dyn Surface, drawing: &PencilDrawing, style: &ResolvedStyle) {
    let [first, rest @ ..] = drawing.points.as_slice() else {
        return;
    };
    if rest.is_empty() {
        return;
    }
    surface.save();
    apply_stroke_and_fill(surface, style);
    surface.begin_path();
    surface.move_to(first.x, first.y);
    for p in rest {
        surface.line_to(p.x, p.y);
    }
    surface.stroke();
    surface.restore();
}

pub fn draw_line(surface: &mut dyn Surface, drawing: &LineDrawing, style: &ResolvedStyle) {
    let (Some(start), Some(end)) = (drawing.start, drawing.end) else {
        return;
    };
    surface.save();
    apply_stroke_and_fill(surface, style);
    surface.begin_path();
    surface.move_to(start.x, start.y);
    surface.line_to(end.x, end.y);
    surface.stroke();
    surface.restore();
}

/// Shaft plus a notched head at `end`. The head's barbs sit `head_length`
/// back from the tip at ±π/8 off the shaft; its notch sits `head_width` back
/// along the shaft.
pub fn draw_arrow(surface: &mut dyn Surface, drawing: &ArrowDrawing, style: &ResolvedStyle) {
    let (Some(start), Some(end)) = (drawing.start, drawing.end) else {
        return;
    };
    surface.save();
    apply_stroke_and_fill(surface, style);
    surface.begin_path();
    surface.move_to(start.x, start.y);
    surface.line_to(end.x, end.y);
    surface.stroke();

    let angle = (end.y - start.y).atan2(end.x - start.x);
    let head_length = drawing.head_length();
    let head_width = drawing.head_width();
    surface.begin_path();
    surface.move_to(end.x, end.y);
    surface.line_to(
        end.x - head_length * (angle - PI / 8.0).cos(),
        end.y - head_length * (angle - PI / 8.0).sin(),
    );
    surface.line_to(
        end.x - head_width * angle.cos(),
        end.y - head_width * angle.sin(),
    );
    surface.line_to(
        end.x - head_length * (angle + PI / 8.0).cos(),
        end.y - head_length * (angle + PI / 8.0).sin(),
    );
    surface.close_path();
    if style.fill.is_some() {
        surface.fill();
    }
    surface.stroke();
    surface.restore();
}

pub fn draw_rectangle(surface: &mut dyn Surface, drawing: &RectangleDrawing, style: &ResolvedStyle) {
    let (Some(start), Some(end)) = (drawing.start, drawing.end) else {
        return;
    };
    let w = (start.x - end.x).abs();
    let h = (start.y - end.y).abs();
    let center = start.midpoint(&end);
    surface.save();
    apply_stroke_and_fill(surface, style);
    surface.translate(center.x, center.y);
    if drawing.angle != 0.0 {
        surface.rotate(drawing.angle);
    }
    surface.begin_path();
    surface.rect(-w / 2.0, -h / 2.0, w, h);
    if style.fill.is_some() {
        surface.fill();
    }
    surface.stroke();
    surface.restore();
}

pub fn draw_ellipse(surface: &mut dyn Surface, drawing: &EllipseDrawing, style: &ResolvedStyle) {
    let (Some(start), Some(end)) = (drawing.start, drawing.end) else {
        return;
    };
    let center = start.midpoint(&end);
    let rx = (start.x - end.x).abs() / 2.0;
    let ry = (start.y - end.y).abs() / 2.0;
    surface.save();
    apply_stroke_and_fill(surface, style);
    surface.translate(center.x, center.y);
    if drawing.angle != 0.0 {
        surface.rotate(drawing.angle);
    }
    surface.begin_path();
    surface.ellipse(0.0, 0.0, rx, ry);
    if style.fill.is_some() {
        surface.fill();
    }
    surface.stroke();
    surface.restore();
}

pub fn draw_text(surface: &mut dyn Surface, drawing: &TextDrawing, style: &ResolvedStyle) {
    let Some(anchor) = drawing.anchor() else {
        return;
    };
    surface.save();
    surface.set_global_alpha(style.opacity);
    surface.translate(anchor.x, anchor.y);
    if drawing.angle != 0.0 {
        surface.rotate(drawing.angle);
    }
    surface.set_fill_color(&style.ink);
    surface.set_font(drawing.font());
    surface.set_text_baseline(drawing.baseline());
    let text = if drawing.text.is_empty() {
        DEFAULT_TEXT
    } else {
        drawing.text.as_str()
    };
    surface.fill_text(text, 0.0, 0.0);
    surface.restore();
}

pub fn draw_icon(surface: &mut dyn Surface, drawing: &IconDrawing, style: &ResolvedStyle) {
    let Some(anchor) = drawing.anchor() else {
        return;
    };
    surface.save();
    surface.set_global_alpha(style.opacity);
    surface.translate(anchor.x, anchor.y);
    if drawing.angle != 0.0 {
        surface.rotate(drawing.angle);
    }
    surface.set_fill_color(&style.ink);
    surface.set_font(&format!("{}px/1 sans-serif", drawing.size()));
    surface.set_text_baseline(TextBaseline::Middle);
    surface.set_text_align(TextAlign::Center);
    let icon = if drawing.icon.is_empty() {
        DEFAULT_ICON
    } else {
        drawing.icon.as_str()
    };
    surface.fill_text(icon, 0.0, 0.0);
    surface.restore();
}

pub fn draw_projection(
    surface: &mut dyn Surface,
    drawing: &ProjectionDrawing,
    style: &ResolvedStyle,
) {
    let (Some(start), Some(end)) = (drawing.start, drawing.end) else {
        return;
    };
    surface.save();
    surface.set_global_alpha(style.opacity);
    surface.set_stroke_color(&style.stroke);
    surface.set_line_width(style.line_width);
    surface.set_line_dash(style.dash.as_deref().unwrap_or_default());
    surface.begin_path();
    surface.move_to(start.x, start.y);
    surface.line_to(end.x, end.y);
    surface.stroke();
    surface.set_line_dash(&[]);
    if let Some(label) = drawing.label.as_deref().filter(|l| !l.is_empty()) {
        let (ox, oy) = PROJECTION_LABEL_OFFSET;
        surface.set_fill_color(&style.ink);
        surface.set_font(drawing.font.as_deref().unwrap_or(DEFAULT_LABEL_FONT));
        surface.set_text_baseline(TextBaseline::Bottom);
        surface.fill_text(label, end.x + ox, end.y + oy);
    }
    surface.restore();
}

/// Selection overlay: a dashed outline through the box's rotated corners and a
/// square handle on each corner.
pub fn draw_selection(surface: &mut dyn Surface, bbox: &BoundingBox, theme: &Theme) {
    let [first, rest @ ..] = &bbox.corners;
    surface.save();
    surface.set_stroke_color(&theme.selection);
    surface.set_fill_color(&theme.selection);
    surface.set_line_width(1.0);
    surface.set_line_dash(&SELECTION_DASH);
    surface.begin_path();
    surface.move_to(first.x, first.y);
    for p in rest {
        surface.line_to(p.x, p.y);
    }
    surface.close_path();
    surface.stroke();
    surface.set_line_dash(&[]);
    let half = SELECTION_HANDLE_SIZE / 2.0;
    for p in &bbox.corners {
        surface.begin_path();
        surface.rect(
            p.x - half,
            p.y - half,
            SELECTION_HANDLE_SIZE,
            SELECTION_HANDLE_SIZE,
        );
        surface.fill();
    }
    surface.restore();
}
