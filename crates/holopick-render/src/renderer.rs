//! Renderer trait abstraction.

use holopick_core::bar::ColorBar;
use holopick_core::layout::PickerLayout;
use holopick_core::picker::ColorPicker;
use holopick_core::wheel::ColorWheel;
use kurbo::{Affine, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The picker whose widgets are drawn.
    pub picker: &'a ColorPicker,
    /// Where each widget sits, in logical pixels.
    pub layout: &'a PickerLayout,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Fill for the pointer halos.
    pub halo_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(picker: &'a ColorPicker, layout: &'a PickerLayout, viewport_size: Size) -> Self {
        Self {
            picker,
            layout,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            halo_color: Color::from_rgba8(0, 0, 0, 0x50),
        }
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

    /// Set the halo color drawn behind pointers.
    pub fn with_halo_color(mut self, color: Color) -> Self {
        self.halo_color = color;
        self
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering engines.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Per-widget drawing, with `transform` mapping widget-local coordinates
/// into the scene.
pub trait WidgetRenderer {
    fn render_wheel(&mut self, wheel: &ColorWheel, transform: Affine, halo: Color);

    fn render_bar(&mut self, bar: &ColorBar, transform: Affine, halo: Color);
}
