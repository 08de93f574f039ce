//! Text rendering using Parley for layout and glyph mapping.

use parley::fontique::{Collection, CollectionOptions};
use parley::{Alignment, FontContext, Layout, LayoutContext, StyleProperty};
use vello::kurbo::{Affine, Rect};
use vello::peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::geometry;
use crate::vgi::Graphics;

/// Text rendering context that manages font and layout contexts.
///
/// Owning one per widget keeps font discovery and shaping caches warm
/// between frames.
pub struct TextRenderContext {
    font_cx: FontContext,
    layout_cx: LayoutContext,
}

impl TextRenderContext {
    /// Create a new text rendering context with system fonts loaded.
    pub fn new() -> Self {
        let font_cx = FontContext {
            collection: Collection::new(CollectionOptions {
                system_fonts: true,
                ..Default::default()
            }),
            source_cache: Default::default(),
        };

        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    /// Draw a single line of text centered in `bounds`.
    ///
    /// Horizontal centering uses the laid-out line width; vertical centering
    /// places the baseline from the font's ascent/descent metrics so the
    /// visual glyph box straddles the vertical center of `bounds`. Backends
    /// without scene access skip text silently.
    pub fn render_centered(
        &mut self,
        graphics: &mut dyn Graphics,
        text: &str,
        font_size: f32,
        color: Color,
        bounds: Rect,
        hint: bool,
    ) {
        if text.is_empty() {
            return;
        }

        let display_scale = 1.0;
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, display_scale, true);
        builder.push_default(StyleProperty::FontSize(font_size));

        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, Default::default());

        let (ascent, descent, line_baseline) = match layout.lines().next() {
            Some(line) => {
                let metrics = line.metrics();
                (metrics.ascent, metrics.descent, metrics.baseline)
            },
            // No line means no resolvable font for this text.
            None => {
                log::warn!("could not lay out text {text:?}, no suitable font available");
                return;
            },
        };

        let baseline = geometry::text_baseline(bounds, ascent, descent);
        let transform = Affine::translate((
            bounds.center().x - f64::from(layout.width()) / 2.0,
            baseline - f64::from(line_baseline),
        ));

        let Some(scene) = graphics.as_scene_mut() else {
            return;
        };
        Self::render_layout(scene, &layout, &Brush::Solid(color), transform, hint);
    }

    /// Render a Parley layout to the scene.
    fn render_layout(
        scene: &mut Scene,
        layout: &Layout<[u8; 4]>,
        brush: &Brush,
        transform: Affine,
        hint: bool,
    ) {
        for line in layout.lines() {
            for item in line.items() {
                let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));
                let coords = run.normalized_coords();

                scene
                    .draw_glyphs(font)
                    .brush(brush)
                    .hint(hint)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(font_size)
                    .normalized_coords(coords)
                    .draw(
                        Fill::NonZero,
                        glyph_run.glyphs().map(|glyph| {
                            let gx = x + glyph.x;
                            let gy = y - glyph.y;
                            x += glyph.advance;
                            vello::Glyph {
                                id: glyph.id as _,
                                x: gx,
                                y: gy,
                            }
                        }),
                    );
            }
        }
    }
}

impl Default for TextRenderContext {
    fn default() -> Self {
        Self::new()
    }
}
