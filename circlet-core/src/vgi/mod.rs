//! Vector Graphics Interface abstraction.
//!
//! This module provides an abstraction over rendering backends, allowing the
//! widget to be decoupled from the specific rendering implementation (e.g.,
//! Vello) and exercised against a recording double in tests.

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill, ImageBrush};
use vello::Scene;

/// A trait for rendering vector graphics.
///
/// Note: Methods use `&BezPath` for object-safety. To use concrete shape
/// types (Rect, Ellipse, Arc, etc.), convert them with [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Draw an image at its natural size under the given transform.
    fn draw_image(&mut self, image: &ImageBrush, transform: Affine);

    /// Append a pre-built scene to this one.
    ///
    /// Used for externally-owned graphic content that already carries its own
    /// draw commands.
    fn append(&mut self, other: &Scene, transform: Option<Affine>);

    /// Access the underlying Scene for operations that require it (e.g.,
    /// Parley glyph rendering). Returns None if the backend doesn't provide
    /// Scene access; callers are expected to skip such operations.
    fn as_scene_mut(&mut self) -> Option<&mut Scene>;
}

/// Helper function to convert a shape to BezPath for use with the [Graphics] trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;
