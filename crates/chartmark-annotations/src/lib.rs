//! # Chartmark Annotations
//!
//! Interactive annotation layer for a 2D chart surface: a closed set of shape
//! variants, analytic hit testing, copy-on-write transforms, an ordered
//! drawing list and the render dispatch that paints it.
//!
//! ## Core Components
//!
//! - **Model**: [`Drawing`] and one struct per variant (pencil, line, arrow,
//!   rectangle, ellipse, text, icon, projection)
//! - **Hit testing**: per-variant tests composed into a topmost-first search
//! - **Transforms**: translate, rotate about the shape center, resize about a
//!   fixed anchor under rotation
//! - **Manager**: [`DrawingManager`] owning the list and rendering it
//! - **Surfaces**: the [`Surface`] trait with a recording display list and a
//!   `tiny-skia` raster backend
//! - **Interaction**: resize handles, grab sessions and pointer drafts
//!
//! ## Architecture
//!
//! ```text
//! DrawingManager (ordered list, index-addressed)
//!   ├── hit_test / erase_at  (topmost first)
//!   ├── translate / rotate / resize_to  (replace the slot)
//!   └── render ──> draw_drawing ──> dyn Surface
//!                                   ├── RecordingSurface
//!                                   └── PixmapSurface
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chartmark_annotations::{DrawingManager, DrawingStyle, LineDrawing, RecordingSurface};
//! use chartmark_core::Point;
//!
//! let mut manager = DrawingManager::new();
//! manager.add(LineDrawing::new(
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 40.0),
//!     DrawingStyle::default(),
//! ));
//!
//! let mut surface = RecordingSurface::new();
//! manager.render(&mut surface, None);
//! assert_eq!(surface.stroke_count(), 1);
//! ```

pub mod error;
pub mod font;
pub mod hit_test;
pub mod interaction;
pub mod manager;
pub mod model;
pub mod render;
pub mod style;
pub mod surface;
pub mod transform;

pub use error::SurfaceError;
pub use hit_test::{is_point_on_drawing, topmost_hit};
pub use interaction::{
    handles, hit_handle, Corner, Draft, GrabMode, GrabSession, Handle, ResizeSession, Tool,
    ToolOptions,
};
pub use manager::{DrawingManager, Erased, Hit};
pub use model::{
    AnnotationShape, ArrowDrawing, Drawing, DrawingKind, DrawingStyle, EllipseDrawing,
    IconDrawing, LineDrawing, PencilDrawing, ProjectionDrawing, RectangleDrawing, TextDrawing,
};
pub use render::{draw_drawing, draw_selection};
pub use style::{resolve_style, ResolvedStyle};
pub use surface::{
    PixmapSurface, RecordingSurface, Surface, SurfaceCommand, TextAlign, TextBaseline,
};
