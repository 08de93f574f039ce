//! Pure geometry shared by the render pass.
//!
//! Everything in here is a function of its arguments only, so the drawing
//! math stays testable without a scene or a window.

use std::f64::consts::FRAC_PI_2;

use vello::kurbo::{Arc, Rect, Size, Vec2};

/// Degrees of arc to draw for the given progress, measured clockwise from
/// 12 o'clock.
///
/// Progress above `max_progress` counts as full; a `max_progress` of zero
/// yields an empty arc instead of dividing by zero.
pub fn sweep_angle(progress: u32, max_progress: u32) -> f64 {
    if max_progress == 0 {
        return 0.0;
    }
    f64::from(progress.min(max_progress)) / f64::from(max_progress) * 360.0
}

/// Bounding rectangle for the ring strokes.
///
/// Inset from the widget bounds by half the stroke width on all four sides,
/// so the stroked ring stays fully inside the widget.
pub fn ring_bounds(bounds: Rect, stroke_width: f64) -> Rect {
    bounds.inset(-stroke_width / 2.0)
}

/// Rectangle of the given size centered in `bounds`.
///
/// Content is shown at its intrinsic size; no scaling is applied.
pub fn centered_rect(bounds: Rect, size: Size) -> Rect {
    Rect::from_center_size(bounds.center(), size)
}

/// Baseline y-position that vertically centers a line of text in `bounds`.
///
/// Derived from the font's ascent and descent so the visual center of the
/// glyphs, not the baseline, sits on the vertical center of the widget.
pub fn text_baseline(bounds: Rect, ascent: f32, descent: f32) -> f64 {
    bounds.center().y + f64::from(ascent - descent) / 2.0
}

/// The progress arc over `bounds`, starting at 12 o'clock and sweeping
/// `sweep_degrees` clockwise.
pub fn progress_arc(bounds: Rect, sweep_degrees: f64) -> Arc {
    Arc::new(
        bounds.center(),
        Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
        -FRAC_PI_2,
        sweep_degrees.to_radians(),
        0.0,
    )
}
