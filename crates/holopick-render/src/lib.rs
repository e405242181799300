//! HoloPick Render Library
//!
//! Renderer abstraction and implementations for HoloPick widgets.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, WidgetRenderer};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
