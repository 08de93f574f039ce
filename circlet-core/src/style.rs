//! Declarative attribute bag for widget configuration.
//!
//! Hosts describe the initial widget appearance as a string-keyed map of
//! typed values, the same way a style/attribute system in a UI framework
//! would hand them over. The widget reads the bag exactly once at
//! construction; absent keys fall back to documented defaults.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use vello::peniko::Color;

use crate::graphic::Graphic;

/// Density scale factor of the host environment.
///
/// Default sizes are given in density-independent units and multiplied by
/// this factor when resolved. Values supplied through a [Style] are expected
/// to be in pixels already; resolving units is the host's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(pub f64);

impl Scale {
    /// Convert a density-independent value to pixels.
    pub fn px(self, dip: f64) -> f64 {
        dip * self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// A single typed attribute value.
#[derive(Clone)]
pub enum StyleVal {
    /// A color value.
    Color(Color),
    /// An ordered list of colors, e.g. gradient stops.
    ColorList(Vec<Color>),
    /// A float value.
    Float(f32),
    /// An unsigned integer value.
    UInt(u32),
    /// A string value.
    Str(String),
    /// Raw encoded bytes, e.g. an encoded bitmap.
    Bytes(Vec<u8>),
    /// A shared handle to externally-owned graphic content.
    Graphic(Arc<dyn Graphic>),
}

impl fmt::Debug for StyleVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => f.debug_tuple("Color").field(color).finish(),
            Self::ColorList(colors) => f.debug_tuple("ColorList").field(colors).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::UInt(value) => f.debug_tuple("UInt").field(value).finish(),
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Graphic(_) => f.write_str("Graphic(..)"),
        }
    }
}

/// Attribute map for configuring widget appearance.
///
/// Keys are plain strings; lookups with a mismatched value type behave like
/// absent keys, so a malformed bag degrades to defaults instead of erroring.
#[derive(Debug, Clone, Default)]
pub struct Style {
    map: IndexMap<String, StyleVal>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self {
            map: IndexMap::with_capacity(16),
        }
    }

    /// Create a style from an iterator of names and values.
    pub fn from_values(values: impl IntoIterator<Item = (String, StyleVal)>) -> Self {
        Self {
            map: IndexMap::from_iter(values),
        }
    }

    /// Insert a style value with the given name and return self.
    pub fn with_value(mut self, name: impl ToString, value: StyleVal) -> Self {
        self.map.insert(name.to_string(), value);
        self
    }

    /// Set a style value by name.
    pub fn set(&mut self, name: impl ToString, value: StyleVal) {
        self.map.insert(name.to_string(), value);
    }

    /// Set a color style value by name.
    pub fn set_color(&mut self, name: impl ToString, color: Color) {
        self.map.insert(name.to_string(), StyleVal::Color(color));
    }

    /// Set a color list style value by name.
    pub fn set_color_list(&mut self, name: impl ToString, colors: impl Into<Vec<Color>>) {
        self.map
            .insert(name.to_string(), StyleVal::ColorList(colors.into()));
    }

    /// Set a float style value by name.
    pub fn set_float(&mut self, name: impl ToString, value: f32) {
        self.map.insert(name.to_string(), StyleVal::Float(value));
    }

    /// Set an unsigned int style value by name.
    pub fn set_uint(&mut self, name: impl ToString, value: u32) {
        self.map.insert(name.to_string(), StyleVal::UInt(value));
    }

    /// Set a string style value by name.
    pub fn set_str(&mut self, name: impl ToString, value: impl ToString) {
        self.map
            .insert(name.to_string(), StyleVal::Str(value.to_string()));
    }

    /// Set a raw bytes style value by name.
    pub fn set_bytes(&mut self, name: impl ToString, bytes: impl Into<Vec<u8>>) {
        self.map
            .insert(name.to_string(), StyleVal::Bytes(bytes.into()));
    }

    /// Set a graphic handle style value by name.
    pub fn set_graphic(&mut self, name: impl ToString, graphic: Arc<dyn Graphic>) {
        self.map
            .insert(name.to_string(), StyleVal::Graphic(graphic));
    }

    /// Removes the style value from the map with the given name.
    pub fn remove(&mut self, name: impl ToString) {
        self.map.swap_remove(&name.to_string());
    }

    /// Get a style value by name. Returns [None] if the value name does not exist.
    pub fn get(&self, name: impl ToString) -> Option<&StyleVal> {
        self.map.get(&name.to_string())
    }

    /// Get a color style value by name.
    pub fn get_color(&self, name: impl ToString) -> Option<Color> {
        match self.get(name) {
            Some(StyleVal::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Get a color list style value by name.
    pub fn get_color_list(&self, name: impl ToString) -> Option<&[Color]> {
        match self.get(name) {
            Some(StyleVal::ColorList(colors)) => Some(colors.as_slice()),
            _ => None,
        }
    }

    /// Get a float style value by name.
    pub fn get_float(&self, name: impl ToString) -> Option<f32> {
        match self.get(name) {
            Some(StyleVal::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get an unsigned int style value by name.
    pub fn get_uint(&self, name: impl ToString) -> Option<u32> {
        match self.get(name) {
            Some(StyleVal::UInt(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get a string style value by name.
    pub fn get_str(&self, name: impl ToString) -> Option<&str> {
        match self.get(name) {
            Some(StyleVal::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Get a raw bytes style value by name.
    pub fn get_bytes(&self, name: impl ToString) -> Option<&[u8]> {
        match self.get(name) {
            Some(StyleVal::Bytes(bytes)) => Some(bytes.as_slice()),
            _ => None,
        }
    }

    /// Get a graphic handle style value by name.
    pub fn get_graphic(&self, name: impl ToString) -> Option<Arc<dyn Graphic>> {
        match self.get(name) {
            Some(StyleVal::Graphic(graphic)) => Some(graphic.clone()),
            _ => None,
        }
    }
}
