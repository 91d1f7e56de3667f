//! Renderer trait abstraction.

use peniko::{Blob, Color, ImageAlphaType, ImageData, ImageFormat};
use thiserror::Error;
use vaultink_core::surface::InkSurface;
use vaultink_core::{Viewport, QUESTION_PADDING};

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to decode question image: {0}")]
    Decode(String),
    #[error("invalid question image: {0}")]
    InvalidImage(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Gap between the bottom of the question image and the divider line.
pub const DIVIDER_GAP: f64 = 16.0;

/// Divider line width in pixels.
pub const DIVIDER_WIDTH: f64 = 2.0;

/// A decoded, ready-to-draw question image.
///
/// The engine assumes a valid image; hosts with encoded bytes can use
/// [`ReferenceImage::decode`], but decode failures are theirs to handle
/// before the surface is constructed.
#[derive(Debug, Clone)]
pub struct ReferenceImage {
    data: ImageData,
}

impl ReferenceImage {
    /// Wrap raw RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> RenderResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RendererError::InvalidImage(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            data: ImageData {
                data: Blob::new(std::sync::Arc::new(pixels)),
                format: ImageFormat::Rgba8,
                width,
                height,
                alpha_type: ImageAlphaType::Alpha,
            },
        })
    }

    /// Decode an encoded image (PNG, JPEG, WebP).
    pub fn decode(bytes: &[u8]) -> RenderResult<Self> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| RendererError::Decode(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_vec())
    }

    pub fn width(&self) -> u32 {
        self.data.width
    }

    pub fn height(&self) -> u32 {
        self.data.height
    }

    pub(crate) fn data(&self) -> &ImageData {
        &self.data
    }
}

/// View-space layout of the question image region for one frame: centered
/// horizontally, scrolled vertically with the document.
#[derive(Debug, Clone, Copy)]
pub struct QuestionLayout {
    /// Left edge, centering the image on the canvas.
    pub left: f64,
    /// Top edge (padding minus scroll).
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Image width in pixels.
    pub width: f64,
}

impl QuestionLayout {
    pub fn compute(viewport: Viewport, image_width: f64, image_height: f64) -> Self {
        let top = QUESTION_PADDING - viewport.scroll_offset;
        Self {
            left: (viewport.size.width - image_width) / 2.0,
            top,
            bottom: top + image_height,
            width: image_width,
        }
    }

    /// Whether any part of the image intersects the visible viewport.
    pub fn is_visible(&self, viewport_height: f64) -> bool {
        self.bottom > 0.0 && self.top < viewport_height
    }

    /// Vertical position of the divider line under the image.
    pub fn divider_y(&self) -> f64 {
        self.bottom + DIVIDER_GAP
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The surface to render.
    pub surface: &'a InkSurface,
    /// Decoded question image, when the host has one.
    pub question_image: Option<&'a ReferenceImage>,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Divider line color.
    pub divider_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a render context with the host app's defaults: white page,
    /// light-gray divider.
    pub fn new(surface: &'a InkSurface) -> Self {
        Self {
            surface,
            question_image: None,
            scale_factor: 1.0,
            background_color: Color::WHITE,
            divider_color: Color::from_rgba8(211, 211, 211, 255),
        }
    }

    /// Set the question image for this frame.
    pub fn with_question_image(mut self, image: &'a ReferenceImage) -> Self {
        self.question_image = Some(image);
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the divider color.
    pub fn with_divider_color(mut self, color: Color) -> Self {
        self.divider_color = color;
        self
    }
}

/// Trait for rendering backends.
///
/// Implementations repaint the whole visible frame from scratch on every
/// call: background, question image when visible, divider, committed
/// strokes in store order, then the in-progress preview.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
