use std::sync::Arc;

use circlet_core::geometry;
use circlet_core::graphic::Graphic;
use circlet_core::image_loader::decode_image;
use circlet_core::paint;
use circlet_core::style::{Scale, Style};
use circlet_core::text_render::TextRenderContext;
use circlet_core::update::Update;
use circlet_core::vg::kurbo::{Affine, Cap, Ellipse, Rect, Size, Stroke};
use circlet_core::vg::peniko::{Brush, Color, ImageBrush, ImageData};
use circlet_core::vgi::{shape_to_path, Graphics};
use thiserror::Error;

/// Attribute names read by [CircleProgress::from_style].
pub mod attrs {
    /// Stroke width of the border ring, in pixels (`Float`).
    pub const BORDER_WIDTH: &str = "border_width";
    /// Color of the border ring (`Color`).
    pub const BORDER_COLOR: &str = "border_color";
    /// Background color of the content area (`Color`). Reserved.
    pub const CONTENT_BACKGROUND: &str = "content_background";
    /// Gradient stop colors for the progress arc (`ColorList`).
    pub const PROGRESS_COLORS: &str = "progress_colors";
    /// Denominator of the progress ratio (`UInt`).
    pub const MAX_PROGRESS: &str = "max_progress";
    /// Initial progress value (`UInt`).
    pub const PROGRESS: &str = "progress";
    /// Raw content kind selector (`UInt`, see [super::ContentKind]).
    pub const CONTENT_TYPE: &str = "content_type";
    /// Text shown for text content (`Str`).
    pub const CONTENT_TEXT: &str = "content_text";
    /// Font size for text content, in pixels (`Float`).
    pub const CONTENT_TEXT_SIZE: &str = "content_text_size";
    /// Color for text content (`Color`).
    pub const CONTENT_TEXT_COLOR: &str = "content_text_color";
    /// Encoded bitmap bytes for image content (`Bytes`).
    pub const CONTENT_IMAGE: &str = "content_image";
    /// Graphic handle for graphic content (`Graphic`).
    pub const CONTENT_GRAPHIC: &str = "content_graphic";
}

/// Default font size for text content, in density-independent pixels.
pub const DEFAULT_TEXT_SIZE: f64 = 10.0;
/// Default color for text content.
pub const DEFAULT_TEXT_COLOR: Color = Color::from_rgb8(0, 0, 0);
/// Default stroke width of the border ring, in density-independent pixels.
pub const DEFAULT_BORDER_WIDTH: f64 = 0.0;
/// Default color of the border ring.
pub const DEFAULT_BORDER_COLOR: Color = Color::TRANSPARENT;
/// Default background color of the content area.
pub const DEFAULT_CONTENT_BACKGROUND: Color = Color::TRANSPARENT;
/// Default denominator of the progress ratio.
pub const DEFAULT_MAX_PROGRESS: u32 = 100;

/// Which of the three content renderers runs in the widget center.
///
/// The raw values accepted by the [attrs::CONTENT_TYPE] attribute are
/// `0` (text), `1` (image) and `2` (graphic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ContentKind {
    /// Draw the configured text string.
    Text = 0,
    /// Draw the configured bitmap image.
    Image = 1,
    /// Draw the configured graphic content.
    Graphic = 2,
}

/// A raw content kind value that does not name a valid [ContentKind].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid content kind value: {0}")]
pub struct InvalidContentKind(pub u32);

impl TryFrom<u32> for ContentKind {
    type Error = InvalidContentKind;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Text),
            1 => Ok(Self::Image),
            2 => Ok(Self::Graphic),
            other => Err(InvalidContentKind(other)),
        }
    }
}

/// Borrowed view of the currently active content.
///
/// Only the payload selected by the content kind is visible here; inactive
/// payloads stay stored in the widget but are not part of the view.
pub enum Content<'a> {
    /// The active text string.
    Text(&'a str),
    /// The active bitmap image.
    Image(&'a ImageData),
    /// The active graphic content.
    Graphic(&'a dyn Graphic),
}

/// A circular progress widget.
///
/// Draws a full border ring, a gradient-colored arc proportional to
/// `progress / max_progress` sweeping clockwise from 12 o'clock, and one of
/// three kinds of centered content: a text string, a bitmap image or an
/// externally-owned [Graphic].
///
/// Setters record an [Update] request instead of drawing; the host drains
/// the request with [CircleProgress::update] once per frame, so rapid
/// mutations coalesce into a single render pass.
///
/// ### Attributes
/// The initial state can be read from a [Style] bag via
/// [CircleProgress::from_style]; see [attrs] for the accepted names. Every
/// attribute is optional and falls back to a documented default.
pub struct CircleProgress {
    border_width: f64,
    border_color: Color,
    content_background: Color,
    kind: ContentKind,
    text: Option<String>,
    text_size: f32,
    text_color: Color,
    progress_colors: Vec<Color>,
    max_progress: u32,
    progress: u32,
    image: Option<ImageData>,
    graphic: Option<Arc<dyn Graphic>>,
    pending: Update,
    text_ctx: TextRenderContext,
}

impl CircleProgress {
    /// Create a widget with the documented defaults.
    pub fn new() -> Self {
        Self::from_style(&Style::new(), Scale::default())
    }

    /// Create a widget from a declarative attribute bag.
    ///
    /// Absent attributes fall back to their defaults; `scale` converts the
    /// density-independent defaults to pixels. Values supplied in the bag
    /// are expected to be in pixels already. Malformed attributes never
    /// fail construction: unusable gradient colors are substituted, an
    /// unknown content kind falls back to text, and undecodable image bytes
    /// leave the image slot unset.
    pub fn from_style(style: &Style, scale: Scale) -> Self {
        let border_width = style
            .get_float(attrs::BORDER_WIDTH)
            .map(f64::from)
            .unwrap_or_else(|| scale.px(DEFAULT_BORDER_WIDTH));
        let border_color = style
            .get_color(attrs::BORDER_COLOR)
            .unwrap_or(DEFAULT_BORDER_COLOR);
        let content_background = style
            .get_color(attrs::CONTENT_BACKGROUND)
            .unwrap_or(DEFAULT_CONTENT_BACKGROUND);
        let progress_colors =
            paint::resolve_stops(style.get_color_list(attrs::PROGRESS_COLORS).unwrap_or(&[]));
        let max_progress = style
            .get_uint(attrs::MAX_PROGRESS)
            .unwrap_or(DEFAULT_MAX_PROGRESS);
        let progress = style
            .get_uint(attrs::PROGRESS)
            .unwrap_or(0)
            .min(max_progress);

        let kind = match style.get_uint(attrs::CONTENT_TYPE) {
            None => ContentKind::Text,
            Some(raw) => ContentKind::try_from(raw).unwrap_or_else(|err| {
                log::warn!("{err}, falling back to text content");
                ContentKind::Text
            }),
        };

        let text = style.get_str(attrs::CONTENT_TEXT).map(str::to_owned);
        let text_size = style
            .get_float(attrs::CONTENT_TEXT_SIZE)
            .unwrap_or_else(|| scale.px(DEFAULT_TEXT_SIZE) as f32);
        let text_color = style
            .get_color(attrs::CONTENT_TEXT_COLOR)
            .unwrap_or(DEFAULT_TEXT_COLOR);

        let image = style.get_bytes(attrs::CONTENT_IMAGE).and_then(|bytes| {
            decode_image(bytes)
                .map_err(|err| log::warn!("ignoring content image: {err}"))
                .ok()
        });
        let graphic = style.get_graphic(attrs::CONTENT_GRAPHIC);

        log::debug!("border_width: {border_width}");
        log::debug!("border_color: {border_color:?}");
        log::debug!("progress_colors: {progress_colors:?}");
        log::debug!("progress: {progress}/{max_progress}");
        log::debug!("content kind: {kind:?}");

        Self {
            border_width,
            border_color,
            content_background,
            kind,
            text,
            text_size,
            text_color,
            progress_colors,
            max_progress,
            progress,
            image,
            graphic,
            pending: Update::empty(),
            text_ctx: TextRenderContext::new(),
        }
    }

    /// Sets the border ring stroke width and returns itself.
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.set_border_width(width);
        self
    }

    /// Sets the border ring color and returns itself.
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.set_border_color(color);
        self
    }

    /// Sets the content kind and returns itself.
    pub fn with_content_kind(mut self, kind: ContentKind) -> Self {
        self.set_content_kind(kind);
        self
    }

    /// Sets the content text and returns itself.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Sets the content text size and returns itself.
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.set_text_size(size);
        self
    }

    /// Sets the content text color and returns itself.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.set_text_color(color);
        self
    }

    /// Sets the gradient colors of the progress arc and returns itself.
    pub fn with_progress_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.set_progress_colors(colors);
        self
    }

    /// Sets the maximum progress and returns itself.
    pub fn with_max_progress(mut self, max_progress: u32) -> Self {
        self.set_max_progress(max_progress);
        self
    }

    /// Sets the progress and returns itself.
    ///
    /// Progress is clamped against the maximum configured at the time of
    /// the call, so configure `max_progress` first.
    pub fn with_progress(mut self, progress: u32) -> Self {
        self.set_progress(progress);
        self
    }

    /// Sets the image content and returns itself.
    pub fn with_image(mut self, image: ImageData) -> Self {
        self.set_image(image);
        self
    }

    /// Sets the graphic content and returns itself.
    pub fn with_graphic(mut self, graphic: Arc<dyn Graphic>) -> Self {
        self.set_graphic(graphic);
        self
    }

    /// The border ring stroke width in pixels.
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// The border ring color.
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// The content area background color.
    ///
    /// Read from the attribute bag for forward compatibility; the current
    /// render pass does not use it.
    pub fn content_background(&self) -> Color {
        self.content_background
    }

    /// The active content kind.
    pub fn content_kind(&self) -> ContentKind {
        self.kind
    }

    /// The stored content text, active or not.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The content text size in pixels.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// The content text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// The gradient stop colors of the progress arc, always at least two.
    pub fn progress_colors(&self) -> &[Color] {
        &self.progress_colors
    }

    /// The maximum progress value.
    pub fn max_progress(&self) -> u32 {
        self.max_progress
    }

    /// The current progress value, never above [Self::max_progress].
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// The stored image content, active or not.
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// The stored graphic content, active or not.
    pub fn graphic(&self) -> Option<&dyn Graphic> {
        self.graphic.as_deref()
    }

    /// The payload selected by the current content kind, if one is set.
    pub fn active_content(&self) -> Option<Content<'_>> {
        match self.kind {
            ContentKind::Text => self.text.as_deref().map(Content::Text),
            ContentKind::Image => self.image.as_ref().map(Content::Image),
            ContentKind::Graphic => self.graphic.as_deref().map(Content::Graphic),
        }
    }

    /// Switch the content renderer. Setting the current kind again is a
    /// no-op and requests no redraw.
    pub fn set_content_kind(&mut self, kind: ContentKind) {
        if kind != self.kind {
            self.kind = kind;
            self.invalidate();
        }
    }

    /// Store the content text. Requests a redraw only while text content is
    /// active; the value is kept either way.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        if self.kind == ContentKind::Text {
            self.invalidate();
        }
    }

    /// Store the content text color. Requests a redraw only while text
    /// content is active.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        if self.kind == ContentKind::Text {
            self.invalidate();
        }
    }

    /// Store the content text size. Requests a redraw only while text
    /// content is active.
    pub fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
        if self.kind == ContentKind::Text {
            self.invalidate();
        }
    }

    /// Store the image content. Requests a redraw only while image content
    /// is active.
    pub fn set_image(&mut self, image: ImageData) {
        self.image = Some(image);
        if self.kind == ContentKind::Image {
            self.invalidate();
        }
    }

    /// Store the graphic content. Requests a redraw only while graphic
    /// content is active.
    pub fn set_graphic(&mut self, graphic: Arc<dyn Graphic>) {
        self.graphic = Some(graphic);
        if self.kind == ContentKind::Graphic {
            self.invalidate();
        }
    }

    /// Set the maximum progress value.
    ///
    /// The stored progress is clamped down when the new maximum undercuts
    /// it, keeping `progress <= max_progress` without touching the render
    /// path.
    pub fn set_max_progress(&mut self, max_progress: u32) {
        self.max_progress = max_progress;
        self.progress = self.progress.min(max_progress);
        self.invalidate();
    }

    /// Set the progress value, clamped to the current maximum.
    pub fn set_progress(&mut self, progress: u32) {
        self.progress = progress.min(self.max_progress);
        self.invalidate();
    }

    /// Update progress and content text together with a single coalesced
    /// redraw request.
    pub fn set_progress_with_text(&mut self, progress: u32, text: impl Into<String>) {
        self.progress = progress.min(self.max_progress);
        self.text = Some(text.into());
        self.invalidate();
    }

    /// Set the border ring stroke width in pixels.
    pub fn set_border_width(&mut self, width: f64) {
        self.border_width = width;
        self.invalidate();
    }

    /// Set the border ring color.
    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        self.invalidate();
    }

    /// Replace the gradient colors of the progress arc.
    ///
    /// The sequence is normalized the same way configuration intake does
    /// it: a single color is duplicated and an empty sequence falls back to
    /// the transparent default, so the stored stops always form a valid
    /// gradient.
    pub fn set_progress_colors(&mut self, colors: impl Into<Vec<Color>>) {
        let colors = colors.into();
        if colors.len() < 2 {
            log::warn!(
                "progress gradient needs at least 2 colors, got {}; substituting",
                colors.len()
            );
        }
        self.progress_colors = paint::resolve_stops(&colors);
        self.invalidate();
    }

    /// Drain the pending re-render request flags.
    ///
    /// Hosts call this once per frame; everything the setters recorded
    /// since the previous call comes back as one coalesced [Update].
    pub fn update(&mut self) -> Update {
        let pending = self.pending;
        self.pending = Update::empty();
        pending
    }

    fn invalidate(&mut self) {
        self.pending |= Update::DRAW;
    }

    /// Render the widget into `bounds`.
    ///
    /// Issues the fixed sequence: border ring, progress arc, then the
    /// active content. Absent optional content renders nothing.
    pub fn render(&mut self, graphics: &mut dyn Graphics, bounds: Rect) {
        let ring = geometry::ring_bounds(bounds, self.border_width);
        let stroke = Stroke::new(self.border_width).with_caps(Cap::Round);

        // Track: the full border ring, no shader.
        graphics.stroke(
            &stroke,
            Affine::IDENTITY,
            &Brush::Solid(self.border_color),
            None,
            &shape_to_path(&Ellipse::from_rect(ring)),
        );

        // Progress arc with the gradient spanning the full widget bounds.
        let sweep = geometry::sweep_angle(self.progress, self.max_progress);
        graphics.stroke(
            &stroke,
            Affine::IDENTITY,
            &Brush::Gradient(paint::progress_gradient(bounds, &self.progress_colors)),
            None,
            &shape_to_path(&geometry::progress_arc(ring, sweep)),
        );

        match self.kind {
            ContentKind::Text => {
                if let Some(text) = &self.text {
                    self.text_ctx.render_centered(
                        graphics,
                        text,
                        self.text_size,
                        self.text_color,
                        bounds,
                        true,
                    );
                }
            },
            ContentKind::Image => {
                if let Some(image) = &self.image {
                    let rect = geometry::centered_rect(
                        bounds,
                        Size::new(f64::from(image.width), f64::from(image.height)),
                    );
                    graphics.draw_image(
                        &ImageBrush::new(image.clone()),
                        Affine::translate(rect.origin().to_vec2()),
                    );
                }
            },
            ContentKind::Graphic => {
                if let Some(graphic) = &self.graphic {
                    let rect = geometry::centered_rect(bounds, graphic.intrinsic_size());
                    graphic.render(graphics, rect);
                }
            },
        }
    }
}

impl Default for CircleProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlet_core::style::StyleVal;

    fn rgba(color: Color) -> [u8; 4] {
        let c = color.to_rgba8();
        [c.r, c.g, c.b, c.a]
    }

    struct NullGraphic;

    impl Graphic for NullGraphic {
        fn intrinsic_size(&self) -> Size {
            Size::new(4.0, 4.0)
        }

        fn render(&self, _graphics: &mut dyn Graphics, _bounds: Rect) {}
    }

    #[test]
    fn defaults_match_documented_values() {
        let mut widget = CircleProgress::new();

        assert_eq!(widget.border_width(), 0.0);
        assert_eq!(rgba(widget.border_color()), rgba(Color::TRANSPARENT));
        assert_eq!(rgba(widget.content_background()), rgba(Color::TRANSPARENT));
        assert_eq!(widget.content_kind(), ContentKind::Text);
        assert_eq!(widget.text(), None);
        assert_eq!(widget.text_size(), 10.0);
        assert_eq!(rgba(widget.text_color()), rgba(Color::from_rgb8(0, 0, 0)));
        assert_eq!(widget.max_progress(), 100);
        assert_eq!(widget.progress(), 0);
        assert_eq!(widget.progress_colors().len(), 2);
        assert!(widget.image().is_none());
        assert!(widget.graphic().is_none());
        assert_eq!(widget.update(), Update::empty());
    }

    #[test]
    fn intake_reads_configured_attributes() {
        let mut style = Style::new();
        style.set_float(attrs::BORDER_WIDTH, 8.0);
        style.set_color(attrs::BORDER_COLOR, Color::from_rgb8(1, 2, 3));
        style.set_color_list(
            attrs::PROGRESS_COLORS,
            vec![Color::from_rgb8(255, 0, 0), Color::from_rgb8(0, 0, 255)],
        );
        style.set_uint(attrs::MAX_PROGRESS, 12);
        style.set_uint(attrs::PROGRESS, 3);
        style.set_uint(attrs::CONTENT_TYPE, ContentKind::Text as u32);
        style.set_str(attrs::CONTENT_TEXT, "25%");
        style.set_float(attrs::CONTENT_TEXT_SIZE, 14.0);
        style.set_color(attrs::CONTENT_TEXT_COLOR, Color::from_rgb8(9, 9, 9));

        let widget = CircleProgress::from_style(&style, Scale::default());

        assert_eq!(widget.border_width(), 8.0);
        assert_eq!(rgba(widget.border_color()), [1, 2, 3, 255]);
        assert_eq!(widget.max_progress(), 12);
        assert_eq!(widget.progress(), 3);
        assert_eq!(widget.text(), Some("25%"));
        assert_eq!(widget.text_size(), 14.0);
        assert_eq!(rgba(widget.text_color()), [9, 9, 9, 255]);
        assert_eq!(widget.progress_colors().len(), 2);
    }

    #[test]
    fn intake_scales_default_sizes_only() {
        // Defaults are density-independent and get scaled...
        let widget = CircleProgress::from_style(&Style::new(), Scale(2.0));
        assert_eq!(widget.text_size(), 20.0);
        assert_eq!(widget.border_width(), 0.0);

        // ...but supplied attribute values are already pixels.
        let mut style = Style::new();
        style.set_float(attrs::CONTENT_TEXT_SIZE, 14.0);
        let widget = CircleProgress::from_style(&style, Scale(2.0));
        assert_eq!(widget.text_size(), 14.0);
    }

    #[test]
    fn intake_clamps_overflowing_progress() {
        let mut style = Style::new();
        style.set_uint(attrs::MAX_PROGRESS, 100);
        style.set_uint(attrs::PROGRESS, 150);

        let widget = CircleProgress::from_style(&style, Scale::default());

        assert_eq!(widget.progress(), 100);
        assert_eq!(
            geometry::sweep_angle(widget.progress(), widget.max_progress()),
            360.0
        );
    }

    #[test]
    fn intake_duplicates_single_gradient_color() {
        let green = Color::from_rgba8(0x00, 0xff, 0x00, 0xff);
        let mut style = Style::new();
        style.set_color_list(attrs::PROGRESS_COLORS, vec![green]);

        let widget = CircleProgress::from_style(&style, Scale::default());

        assert_eq!(widget.progress_colors().len(), 2);
        assert_eq!(rgba(widget.progress_colors()[0]), rgba(green));
        assert_eq!(rgba(widget.progress_colors()[1]), rgba(green));
    }

    #[test]
    fn intake_falls_back_on_unknown_content_kind() {
        let mut style = Style::new();
        style.set_uint(attrs::CONTENT_TYPE, 9);

        let widget = CircleProgress::from_style(&style, Scale::default());
        assert_eq!(widget.content_kind(), ContentKind::Text);
    }

    #[test]
    fn intake_decodes_image_bytes() {
        let mut encoded = Vec::new();
        image::write_buffer_with_format(
            &mut std::io::Cursor::new(&mut encoded),
            &[0, 0, 0, 255],
            1,
            1,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .unwrap();

        let mut style = Style::new();
        style.set_uint(attrs::CONTENT_TYPE, ContentKind::Image as u32);
        style.set_bytes(attrs::CONTENT_IMAGE, encoded);

        let widget = CircleProgress::from_style(&style, Scale::default());
        let image = widget.image().expect("image should decode");
        assert_eq!((image.width, image.height), (1, 1));
    }

    #[test]
    fn intake_ignores_undecodable_image_bytes() {
        let mut style = Style::new();
        style.set_bytes(attrs::CONTENT_IMAGE, b"not an image".to_vec());

        let widget = CircleProgress::from_style(&style, Scale::default());
        assert!(widget.image().is_none());
    }

    #[test]
    fn raw_kind_conversion_rejects_unknown_values() {
        assert_eq!(ContentKind::try_from(0), Ok(ContentKind::Text));
        assert_eq!(ContentKind::try_from(1), Ok(ContentKind::Image));
        assert_eq!(ContentKind::try_from(2), Ok(ContentKind::Graphic));
        assert_eq!(ContentKind::try_from(3), Err(InvalidContentKind(3)));
    }

    #[test]
    fn switching_kind_requests_redraw_only_on_change() {
        let mut widget = CircleProgress::new();

        widget.set_content_kind(ContentKind::Text);
        assert_eq!(widget.update(), Update::empty());

        widget.set_content_kind(ContentKind::Image);
        assert_eq!(widget.update(), Update::DRAW);
        assert_eq!(widget.content_kind(), ContentKind::Image);
    }

    #[test]
    fn inactive_text_updates_store_without_redraw() {
        let mut widget = CircleProgress::new().with_content_kind(ContentKind::Image);
        widget.update();

        widget.set_text("hidden");
        widget.set_text_size(22.0);
        widget.set_text_color(Color::from_rgb8(5, 5, 5));

        assert_eq!(widget.update(), Update::empty());
        assert_eq!(widget.text(), Some("hidden"));
        assert_eq!(widget.text_size(), 22.0);
    }

    #[test]
    fn active_text_updates_request_redraw() {
        let mut widget = CircleProgress::new();
        widget.update();

        widget.set_text("42%");
        assert_eq!(widget.update(), Update::DRAW);
    }

    #[test]
    fn inactive_image_and_graphic_updates_store_without_redraw() {
        let mut widget = CircleProgress::new();
        widget.update();

        widget.set_image(circlet_core::image_loader::rgba_image((1, 1), vec![0u8; 4]));
        widget.set_graphic(Arc::new(NullGraphic));

        assert_eq!(widget.update(), Update::empty());
        assert!(widget.image().is_some());
        assert!(widget.graphic().is_some());

        widget.set_content_kind(ContentKind::Graphic);
        widget.update();
        widget.set_graphic(Arc::new(NullGraphic));
        assert_eq!(widget.update(), Update::DRAW);
    }

    #[test]
    fn progress_setters_always_request_redraw() {
        let mut widget = CircleProgress::new().with_content_kind(ContentKind::Image);
        widget.update();

        widget.set_progress(10);
        assert_eq!(widget.update(), Update::DRAW);
        widget.set_max_progress(50);
        assert_eq!(widget.update(), Update::DRAW);
        widget.set_border_width(2.0);
        assert_eq!(widget.update(), Update::DRAW);
        widget.set_border_color(Color::from_rgb8(7, 7, 7));
        assert_eq!(widget.update(), Update::DRAW);
    }

    #[test]
    fn progress_clamps_eagerly() {
        let mut widget = CircleProgress::new();

        widget.set_progress(150);
        assert_eq!(widget.progress(), 100);

        widget.set_max_progress(40);
        assert_eq!(widget.progress(), 40);

        widget.set_max_progress(0);
        assert_eq!(widget.progress(), 0);
        assert_eq!(
            geometry::sweep_angle(widget.progress(), widget.max_progress()),
            0.0
        );
    }

    #[test]
    fn combined_update_is_one_request() {
        let mut widget = CircleProgress::new();
        widget.update();

        widget.set_progress_with_text(42, "42%");

        assert_eq!(widget.progress(), 42);
        assert_eq!(widget.text(), Some("42%"));
        assert_eq!(widget.update(), Update::DRAW);
        assert_eq!(widget.update(), Update::empty());
    }

    #[test]
    fn rapid_mutations_coalesce() {
        let mut widget = CircleProgress::new();
        widget.update();

        widget.set_progress(1);
        widget.set_progress(2);
        widget.set_border_width(3.0);

        assert_eq!(widget.update(), Update::DRAW);
    }

    #[test]
    fn progress_colors_setter_normalizes_like_intake() {
        let mut widget = CircleProgress::new();
        widget.update();

        widget.set_progress_colors(Vec::<Color>::new());
        assert_eq!(widget.progress_colors().len(), 2);
        assert_eq!(rgba(widget.progress_colors()[0]), rgba(Color::TRANSPARENT));

        let red = Color::from_rgb8(255, 0, 0);
        widget.set_progress_colors(vec![red]);
        assert_eq!(widget.progress_colors().len(), 2);
        assert_eq!(rgba(widget.progress_colors()[1]), rgba(red));
        assert_eq!(widget.update(), Update::DRAW);
    }

    #[test]
    fn active_content_follows_kind() {
        let mut widget = CircleProgress::new();
        assert!(widget.active_content().is_none());

        widget.set_text("hello");
        assert!(matches!(
            widget.active_content(),
            Some(Content::Text("hello"))
        ));

        widget.set_content_kind(ContentKind::Image);
        assert!(widget.active_content().is_none());

        widget.set_image(circlet_core::image_loader::rgba_image((1, 1), vec![0u8; 4]));
        assert!(matches!(widget.active_content(), Some(Content::Image(_))));

        widget.set_content_kind(ContentKind::Graphic);
        widget.set_graphic(Arc::new(NullGraphic));
        assert!(matches!(widget.active_content(), Some(Content::Graphic(_))));
    }

    #[test]
    fn builders_configure_text_content() {
        let widget = CircleProgress::new()
            .with_text("75%")
            .with_text_size(18.0)
            .with_text_color(Color::from_rgb8(250, 250, 250));

        assert_eq!(widget.text(), Some("75%"));
        assert_eq!(widget.text_size(), 18.0);
        assert_eq!(rgba(widget.text_color()), [250, 250, 250, 255]);
    }

    #[test]
    fn style_value_graphic_roundtrips_through_intake() {
        let mut style = Style::new();
        style.set(
            attrs::CONTENT_GRAPHIC,
            StyleVal::Graphic(Arc::new(NullGraphic)),
        );
        style.set_uint(attrs::CONTENT_TYPE, ContentKind::Graphic as u32);

        let widget = CircleProgress::from_style(&style, Scale::default());
        let graphic = widget.graphic().expect("graphic should be stored");
        assert_eq!(graphic.intrinsic_size(), Size::new(4.0, 4.0));
    }
}
