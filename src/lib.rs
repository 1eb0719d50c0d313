//! # Chartmark
//!
//! An interactive annotation layer for price/time charts. Users draw freehand
//! strokes, lines, arrows, rectangles, ellipses, text notes, icons and
//! projection lines on top of a chart, then pick, move, rotate, resize and
//! erase them.
//!
//! ## Architecture
//!
//! Chartmark is organized as a workspace with multiple crates:
//!
//! 1. **chartmark-core** - Points, rotation math, bounding boxes, constants, theme
//! 2. **chartmark-annotations** - Shape model, hit testing, transforms, drawing
//!    list and render dispatch onto a drawing surface
//! 3. **chartmark-settings** - Theme and tolerance configuration (JSON/TOML)
//! 4. **chartmark** - This facade, re-exporting the above plus logging setup

pub use chartmark_annotations as annotations;
pub use chartmark_core as geometry;
pub use chartmark_settings as settings;

pub use chartmark_annotations::{
    AnnotationShape, Draft, Drawing, DrawingKind, DrawingManager, DrawingStyle, GrabSession,
    PixmapSurface, RecordingSurface, Surface, Tool, ToolOptions,
};
pub use chartmark_core::{BoundingBox, Point, Theme};
pub use chartmark_settings::{Config, InteractionSettings};

/// Initialize tracing/logging infrastructure.
///
/// Respects `RUST_LOG` and always enables `info`. Fails if a global
/// subscriber has already been installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
