use std::sync::Arc;

use circlet_core::graphic::Graphic;
use circlet_core::vg::kurbo::{Affine, Rect, Size};
use circlet_core::vg::Scene;
use circlet_core::vgi::Graphics;
use thiserror::Error;
use vello_svg::usvg;

/// Errors that can occur while building an [SvgGraphic].
#[derive(Debug, Error)]
pub enum SvgGraphicError {
    /// The source string is not valid SVG.
    #[error("failed to parse SVG source: {0}")]
    Parse(#[from] usvg::Error),
}

/// Graphic content backed by an SVG document.
///
/// The SVG is parsed and rendered into a [Scene] once at construction; the
/// widget then appends that scene wherever the content belongs. The natural
/// size comes from the document's own width/height.
#[derive(Clone)]
pub struct SvgGraphic {
    scene: Arc<Scene>,
    width: f64,
    height: f64,
}

impl SvgGraphic {
    /// Parse the given SVG source into renderable graphic content.
    pub fn new(source: impl AsRef<str>) -> Result<Self, SvgGraphicError> {
        let tree = usvg::Tree::from_str(source.as_ref(), &usvg::Options::default())?;
        let scene = vello_svg::render_tree(&tree);
        let svg_size = tree.size();

        Ok(Self {
            scene: Arc::new(scene),
            width: f64::from(svg_size.width()),
            height: f64::from(svg_size.height()),
        })
    }

    /// Returns the underlying [Scene].
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Graphic for SvgGraphic {
    fn intrinsic_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn render(&self, graphics: &mut dyn Graphics, bounds: Rect) {
        graphics.append(&self.scene, Some(Affine::translate(bounds.origin().to_vec2())));
    }
}
