use rusttype::{point as rt_point, Scale};
use tiny_skia::{
    Color, ColorU8, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, PixmapPaint,
    Rect, Stroke, StrokeDash, Transform,
};
use tracing::{debug, trace};

use super::{parse_color, Surface, TextAlign, TextBaseline};
use crate::error::SurfaceError;
use crate::font::{font_for, FontSpec};

#[derive(Debug, Clone, Copy)]
enum PathOp {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Oval { cx: f32, cy: f32, rx: f32, ry: f32 },
    Close,
}

#[derive(Debug, Clone)]
struct State {
    transform: Transform,
    stroke: Color,
    fill: Color,
    alpha: f32,
    line_width: f32,
    dash: Vec<f32>,
    font: String,
    baseline: TextBaseline,
    align: TextAlign,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            stroke: Color::BLACK,
            fill: Color::BLACK,
            alpha: 1.0,
            line_width: 1.0,
            dash: Vec::new(),
            font: "10px sans-serif".to_string(),
            baseline: TextBaseline::Alphabetic,
            align: TextAlign::Left,
        }
    }
}

/// Raster surface backed by a `tiny-skia` pixmap.
///
/// Paths are painted with the transform in effect at `fill`/`stroke` time.
/// Colors that fail to parse leave the previous color in place.
pub struct PixmapSurface {
    pixmap: Pixmap,
    state: State,
    stack: Vec<State>,
    path: Vec<PathOp>,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            state: State::default(),
            stack: Vec::new(),
            path: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Demultiplied RGBA at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    fn build_path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        for op in &self.path {
            match *op {
                PathOp::MoveTo(x, y) => pb.move_to(x, y),
                PathOp::LineTo(x, y) => pb.line_to(x, y),
                PathOp::Oval { cx, cy, rx, ry } => {
                    if let Some(rect) = Rect::from_xywh(cx - rx, cy - ry, rx * 2.0, ry * 2.0) {
                        pb.push_oval(rect);
                    }
                }
                PathOp::Close => pb.close(),
            }
        }
        pb.finish()
    }

    fn paint(&self, color: Color) -> Paint<'static> {
        let mut color = color;
        color.apply_opacity(self.state.alpha);
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        paint
    }

    fn stroke_style(&self) -> Stroke {
        let mut stroke = Stroke {
            width: self.state.line_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        if !self.state.dash.is_empty() {
            let mut dash = self.state.dash.clone();
            // Canvas repeats odd-length patterns to make them even.
            if dash.len() % 2 == 1 {
                dash.extend_from_within(..);
            }
            stroke.dash = StrokeDash::new(dash, 0.0);
        }
        stroke
    }

    /// Coverage mask of `text` laid out with its top-left at the origin,
    /// plus the layout's width and ascent/descent.
    fn rasterize_text(&self, text: &str, color: Color) -> Option<(Pixmap, f32, f32, f32)> {
        let spec = FontSpec::parse(&self.state.font);
        let Some(font) = font_for(&spec) else {
            debug!("Skipping text '{}': no font for '{}'", text, spec.family);
            return None;
        };
        let scale = Scale::uniform(spec.size as f32);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<_> = font
            .layout(text, scale, rt_point(0.0, v_metrics.ascent))
            .collect();
        let width = glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        let height = v_metrics.ascent - v_metrics.descent;

        let mut mask = Pixmap::new(width.ceil().max(1.0) as u32, height.ceil().max(1.0) as u32)?;
        let (mw, mh) = (mask.width() as i32, mask.height() as i32);
        let ink = color.to_color_u8();
        let pixels = mask.pixels_mut();
        for glyph in &glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px >= mw || py >= mh {
                    return;
                }
                let idx = (py * mw + px) as usize;
                let a = (v.clamp(0.0, 1.0) * ink.alpha() as f32).round() as u8;
                if a > pixels[idx].alpha() {
                    pixels[idx] = ColorU8::from_rgba(ink.red(), ink.green(), ink.blue(), a)
                        .premultiply();
                }
            });
        }
        Some((mask, width, v_metrics.ascent, v_metrics.descent))
    }
}

impl Surface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform.pre_translate(dx as f32, dy as f32);
    }

    fn rotate(&mut self, angle: f64) {
        let rotation = Transform::from_rotate(angle.to_degrees() as f32);
        self.state.transform = self.state.transform.pre_concat(rotation);
    }

    fn set_stroke_color(&mut self, color: &str) {
        match parse_color(color) {
            Some(c) => self.state.stroke = c,
            None => trace!("Ignoring unparsable stroke color '{}'", color),
        }
    }

    fn set_fill_color(&mut self, color: &str) {
        match parse_color(color) {
            Some(c) => self.state.fill = c,
            None => trace!("Ignoring unparsable fill color '{}'", color),
        }
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        if alpha.is_finite() {
            self.state.alpha = alpha.clamp(0.0, 1.0) as f32;
        }
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width as f32;
        }
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        if dash.iter().all(|d| d.is_finite() && *d >= 0.0) {
            self.state.dash = dash.iter().map(|d| *d as f32).collect();
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(PathOp::MoveTo(x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(PathOp::LineTo(x as f32, y as f32));
    }

    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        self.path.push(PathOp::Oval {
            cx: cx as f32,
            cy: cy as f32,
            rx: rx as f32,
            ry: ry as f32,
        });
    }

    fn close_path(&mut self) {
        self.path.push(PathOp::Close);
    }

    fn fill(&mut self) {
        let Some(path) = self.build_path() else {
            return;
        };
        let paint = self.paint(self.state.fill);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, self.state.transform, None);
    }

    fn stroke(&mut self) {
        let Some(path) = self.build_path() else {
            return;
        };
        let paint = self.paint(self.state.stroke);
        let stroke = self.stroke_style();
        self.pixmap
            .stroke_path(&path, &paint, &stroke, self.state.transform, None);
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if text.is_empty() {
            return;
        }
        let mut color = self.state.fill;
        color.apply_opacity(self.state.alpha);
        let Some((mask, width, ascent, descent)) = self.rasterize_text(text, color) else {
            return;
        };
        let ox = match self.state.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        };
        let oy = match self.state.baseline {
            TextBaseline::Top => 0.0,
            TextBaseline::Middle => -(ascent - descent) / 2.0,
            TextBaseline::Alphabetic => -ascent,
            TextBaseline::Bottom => -(ascent - descent),
        };
        let transform = self
            .state
            .transform
            .pre_translate(x as f32 + ox, y as f32 + oy);
        self.pixmap
            .draw_pixmap(0, 0, mask.as_ref(), &PixmapPaint::default(), transform, None);
    }
}
