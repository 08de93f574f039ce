//! Gradient stop resolution and brush construction for the progress arc.

use vello::kurbo::{Point, Rect};
use vello::peniko::{Color, Extend, Gradient};

/// Fallback gradient stops used when no usable colors are configured.
pub const DEFAULT_STOPS: [Color; 2] = [Color::TRANSPARENT, Color::TRANSPARENT];

/// Normalize a color sequence into a valid gradient stop list.
///
/// A gradient needs at least two stops: a single color is duplicated, an
/// empty sequence falls back to [DEFAULT_STOPS]. Longer sequences are copied
/// unchanged and in order. This never fails.
pub fn resolve_stops(colors: &[Color]) -> Vec<Color> {
    match colors {
        [] => DEFAULT_STOPS.to_vec(),
        [single] => vec![*single, *single],
        _ => colors.to_vec(),
    }
}

/// Build the linear gradient painted onto the progress arc.
///
/// The gradient line runs from the top-left to the bottom-right corner of
/// the widget bounds with evenly spaced stops and reflect tiling. The arc
/// picks its color by where its points fall along this line; the bounds here
/// are the full widget bounds, not the inset ring bounds.
pub fn progress_gradient(bounds: Rect, colors: &[Color]) -> Gradient {
    let denom = colors.len().saturating_sub(1).max(1) as f32;
    let stops: Vec<(f32, Color)> = colors
        .iter()
        .enumerate()
        .map(|(i, &color)| (i as f32 / denom, color))
        .collect();

    let mut gradient = Gradient::new_linear(
        Point::new(bounds.x0, bounds.y0),
        Point::new(bounds.x1, bounds.y1),
    )
    .with_stops(stops.as_slice());
    gradient.extend = Extend::Reflect;
    gradient
}
