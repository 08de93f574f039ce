#![warn(missing_docs)]

//! Widget library for circlet => See `circlet` crate.
//!
//! Contains the [circle_progress::CircleProgress] widget and the graphic
//! content types it can display.

/// Contains the [circle_progress::CircleProgress] widget.
pub mod circle_progress;

/// Contains the [svg_graphic::SvgGraphic] content type.
pub mod svg_graphic;
