use chartmark_core::constants::HIT_TOLERANCE;
use chartmark_core::{BoundingBox, Point, Theme};
use tracing::{debug, trace};

use crate::hit_test::topmost_hit;
use crate::model::{AnnotationShape, Drawing};
use crate::render::draw_drawing;
use crate::surface::Surface;

/// A hit-test match: the shape and its current list index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    pub index: usize,
    pub drawing: &'a Drawing,
}

/// A shape removed by [`DrawingManager::erase_at`], with its index before
/// removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Erased {
    pub index: usize,
    pub drawing: Drawing,
}

/// Owns the ordered drawing list and paints it.
///
/// `DrawingManager` is responsible for:
/// - Appending, undoing, erasing and clearing annotations
/// - Topmost-first hit testing over the list
/// - Committing translate/rotate/resize results back into their slot
/// - Painting the list (plus an optional draft) onto a [`Surface`]
///
/// # Identity
///
/// Shapes are addressed by index. Any mutation that removes entries (`undo`,
/// `erase_at`, `clear`) invalidates indices held by callers; re-resolve them
/// with [`DrawingManager::hit_test`] rather than caching them.
///
/// # Failure Semantics
///
/// Nothing here errors. Out-of-range indices are no-ops returning `None`, and
/// shapes missing required geometry are skipped by hit testing and rendering.
#[derive(Debug, Clone, Default)]
pub struct DrawingManager {
    drawings: Vec<Drawing>,
    theme: Theme,
}

impl DrawingManager {
    /// Creates an empty manager using the default theme.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartmark_annotations::DrawingManager;
    ///
    /// let manager = DrawingManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            drawings: Vec::new(),
            theme,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    pub fn get(&self, index: usize) -> Option<&Drawing> {
        self.drawings.get(index)
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Drawing> {
        self.drawings.iter()
    }

    /// Appends a shape on top of the others and returns its index.
    pub fn add(&mut self, drawing: impl Into<Drawing>) -> usize {
        let drawing = drawing.into();
        debug!("Adding {} drawing at index {}", drawing.kind(), self.drawings.len());
        self.drawings.push(drawing);
        self.drawings.len() - 1
    }

    /// Removes and returns the most recently added shape.
    ///
    /// # Returns
    ///
    /// `None` when the list is empty.
    pub fn undo(&mut self) -> Option<Drawing> {
        let removed = self.drawings.pop();
        if let Some(d) = &removed {
            debug!("Undid {} drawing, {} remain", d.kind(), self.drawings.len());
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} drawings", self.drawings.len());
        self.drawings.clear();
    }

    /// Finds the topmost shape under `point`.
    ///
    /// The list is searched from the most recently added shape down, so where
    /// shapes overlap the one painted last wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartmark_annotations::{DrawingManager, DrawingStyle, RectangleDrawing};
    /// use chartmark_core::Point;
    ///
    /// let mut manager = DrawingManager::new();
    /// manager.add(RectangleDrawing::new(
    ///     Point::new(0.0, 0.0),
    ///     Point::new(10.0, 10.0),
    ///     DrawingStyle::default(),
    /// ));
    /// assert_eq!(manager.hit_test(Point::new(5.0, 5.0), 2.0).map(|h| h.index), Some(0));
    /// assert!(manager.hit_test(Point::new(50.0, 50.0), 2.0).is_none());
    /// ```
    pub fn hit_test(&self, point: Point, tolerance: f64) -> Option<Hit<'_>> {
        let index = topmost_hit(&self.drawings, point, tolerance)?;
        Some(Hit {
            index,
            drawing: &self.drawings[index],
        })
    }

    /// [`DrawingManager::hit_test`] with the default pick radius.
    pub fn hit_test_default(&self, point: Point) -> Option<Hit<'_>> {
        self.hit_test(point, HIT_TOLERANCE)
    }

    /// Removes the topmost shape under `point`.
    ///
    /// Later shapes shift down by one index; earlier shapes keep theirs.
    pub fn erase_at(&mut self, point: Point, tolerance: f64) -> Option<Erased> {
        let index = topmost_hit(&self.drawings, point, tolerance)?;
        let drawing = self.drawings.remove(index);
        debug!("Erased {} drawing at index {}", drawing.kind(), index);
        Some(Erased { index, drawing })
    }

    pub fn bounding_box(&self, drawing: &Drawing) -> Option<BoundingBox> {
        drawing.bounding_box()
    }

    pub fn center(&self, drawing: &Drawing) -> Point {
        drawing.center()
    }

    /// Moves the shape at `index` by `(dx, dy)` and returns the new value.
    pub fn translate(&mut self, index: usize, dx: f64, dy: f64) -> Option<&Drawing> {
        let slot = self.drawings.get_mut(index)?;
        trace!("Translating drawing {} by ({}, {})", index, dx, dy);
        *slot = slot.translated(dx, dy);
        Some(&*slot)
    }

    /// Rotates the shape at `index` about its own center.
    pub fn rotate(&mut self, index: usize, angle_delta: f64) -> Option<&Drawing> {
        let slot = self.drawings.get_mut(index)?;
        trace!("Rotating drawing {} by {} rad", index, angle_delta);
        *slot = slot.rotated(angle_delta);
        Some(&*slot)
    }

    /// Replaces the shape at `index` with a resized copy.
    ///
    /// # Arguments
    ///
    /// * `index` - Slot to replace
    /// * `base` - Snapshot taken when the drag began, or `None` to scale the
    ///   current value
    /// * `anchor` - Point that stays fixed
    /// * `angle` - Rotation of the frame the factors apply in
    /// * `scale_x`, `scale_y` - Factors along that frame's axes
    ///
    /// # Returns
    ///
    /// The committed shape, or `None` when `index` is out of range.
    pub fn resize_to(
        &mut self,
        index: usize,
        base: Option<&Drawing>,
        anchor: Point,
        angle: f64,
        scale_x: f64,
        scale_y: f64,
    ) -> Option<&Drawing> {
        let slot = self.drawings.get_mut(index)?;
        let source = base.unwrap_or(&*slot);
        trace!(
            "Resizing drawing {} about ({}, {}) by {}x{}",
            index,
            anchor.x,
            anchor.y,
            scale_x,
            scale_y
        );
        let next = source.scaled_from(anchor, angle, scale_x, scale_y);
        *slot = next;
        Some(&*slot)
    }

    /// Clears `surface` and paints the list oldest first, then `draft` on
    /// top of everything.
    pub fn render(&self, surface: &mut dyn Surface, draft: Option<&Drawing>) {
        surface.clear();
        for drawing in self.drawings.iter().chain(draft) {
            draw_drawing(surface, drawing, &self.theme);
        }
    }
}

impl<'a> IntoIterator for &'a DrawingManager {
    type Item = &'a Drawing;
    type IntoIter = std::slice::Iter<'a, Drawing>;

    fn into_iter(self) -> Self::IntoIter {
        self.drawings.iter()
    }
}
