use super::{Surface, TextAlign, TextBaseline};

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Clear,
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Rotate { angle: f64 },
    SetStrokeColor(String),
    SetFillColor(String),
    SetGlobalAlpha(f64),
    SetLineWidth(f64),
    SetLineDash(Vec<f64>),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    ClosePath,
    Fill,
    Stroke,
    SetFont(String),
    SetTextBaseline(TextBaseline),
    SetTextAlign(TextAlign),
    FillText { text: String, x: f64, y: f64 },
}

/// Surface that keeps a display list instead of painting.
///
/// A host replays [`RecordingSurface::commands`] onto its own canvas. Since
/// `clear` wipes everything painted, it also drops everything recorded so the
/// list always describes exactly one frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `stroke` calls, a cheap proxy for shapes painted.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::Stroke))
            .count()
    }

    fn push(&mut self, command: SurfaceCommand) {
        self.commands.push(command);
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.push(SurfaceCommand::Clear);
    }

    fn save(&mut self) {
        self.push(SurfaceCommand::Save);
    }

    fn restore(&mut self) {
        self.push(SurfaceCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.push(SurfaceCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, angle: f64) {
        self.push(SurfaceCommand::Rotate { angle });
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.push(SurfaceCommand::SetStrokeColor(color.to_string()));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.push(SurfaceCommand::SetFillColor(color.to_string()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.push(SurfaceCommand::SetGlobalAlpha(alpha));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(SurfaceCommand::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        self.push(SurfaceCommand::SetLineDash(dash.to_vec()));
    }

    fn begin_path(&mut self) {
        self.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(SurfaceCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(SurfaceCommand::LineTo { x, y });
    }

    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        self.push(SurfaceCommand::Ellipse { cx, cy, rx, ry });
    }

    fn close_path(&mut self) {
        self.push(SurfaceCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.push(SurfaceCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(SurfaceCommand::Stroke);
    }

    fn set_font(&mut self, font: &str) {
        self.push(SurfaceCommand::SetFont(font.to_string()));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.push(SurfaceCommand::SetTextBaseline(baseline));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(SurfaceCommand::SetTextAlign(align));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.push(SurfaceCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
