#![warn(missing_docs)]

//! Core library for circlet => See `circlet` crate.
//!
//! Contains the host-independent capabilities the widget is built on: the
//! drawing-surface abstraction, re-render request flags, the attribute bag
//! used for declarative configuration, and the geometry and paint helpers.

pub use vello as vg;

/// Contains the update mode bitflag.
pub mod update;

/// Contains the vector graphics interface abstraction.
pub mod vgi;

/// Contains the [Style](style::Style) attribute bag and density scale.
pub mod style;

/// Contains the pure geometry helpers shared by the render pass.
pub mod geometry;

/// Contains gradient stop resolution and brush construction.
pub mod paint;

/// Contains the [Graphic](graphic::Graphic) trait for vector content.
pub mod graphic;

/// Contains bitmap decoding into renderable image data.
pub mod image_loader;

/// Contains text layout and glyph rendering built on Parley.
pub mod text_render;
