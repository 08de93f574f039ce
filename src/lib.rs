#![warn(missing_docs)]

//! A circular progress widget for vello-based UIs.
//!
//! The widget draws a border ring, a gradient-colored progress arc and a
//! centered content area showing text, a bitmap image or a vector graphic.
//! Drawing goes through the [`Graphics`](core::vgi::Graphics) abstraction and
//! configuration comes from a [`Style`](core::style::Style) attribute bag, so
//! the widget itself stays independent of any concrete host runtime.

pub use vello as vg;

pub use circlet_core as core;
pub use circlet_widgets as widgets;

/// A "prelude" for users of the circlet widget.
///
/// Importing this module brings into scope the most common types needed to
/// configure, mutate and render the widget.
///
/// ```rust
/// use circlet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::geometry;
    pub use crate::core::graphic::Graphic;
    pub use crate::core::image_loader::{decode_image, rgba_image};
    pub use crate::core::paint;
    pub use crate::core::style::{Scale, Style, StyleVal};
    pub use crate::core::text_render::TextRenderContext;
    pub use crate::core::update::Update;
    pub use crate::core::vgi::{shape_to_path, vello_vg::VelloGraphics, Graphics};

    pub use crate::widgets::circle_progress::{CircleProgress, Content, ContentKind};
    pub use crate::widgets::svg_graphic::SvgGraphic;

    // Geometry and color primitives
    pub use crate::vg::kurbo::{Affine, Point, Rect, Size};
    pub use crate::vg::peniko::Color;
    pub use crate::vg::Scene;
}
