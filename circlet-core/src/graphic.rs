//! Externally-owned graphic content with an intrinsic size.

use vello::kurbo::{Rect, Size};

use crate::vgi::Graphics;

/// Vector or otherwise pre-built drawable content.
///
/// A graphic carries its own draw commands and a natural size; the widget
/// decides where it goes by handing it a target rectangle of exactly that
/// size. Implementations draw through the [Graphics] abstraction, so they
/// stay backend-independent like the widget itself.
pub trait Graphic {
    /// The natural width and height of the content, in pixels.
    fn intrinsic_size(&self) -> Size;

    /// Draw the content into `bounds`.
    ///
    /// `bounds` has the graphic's intrinsic size; implementations only need
    /// to translate, not scale.
    fn render(&self, graphics: &mut dyn Graphics, bounds: Rect);
}
