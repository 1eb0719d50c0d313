//! # Chartmark Core
//!
//! Geometry kernel and shared value types for the Chartmark annotation engine.
//!
//! Everything in this crate is pure: points, rotations about a center,
//! point-to-segment distance, anchor-relative scaling and bounding boxes with
//! rotated corners. The annotation crate builds its shape model on top of it.

pub mod bounds;
pub mod constants;
pub mod geometry;
pub mod theme;

pub use bounds::BoundingBox;
pub use geometry::{distance_to_segment, rotate_point, scale_point, Point};
pub use theme::Theme;
