//! VaultInk Render Library
//!
//! Renderer abstraction and implementations for the VaultInk writing
//! surface. The default implementation uses Vello for GPU-accelerated
//! rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{
    QuestionLayout, ReferenceImage, RenderContext, RenderResult, Renderer, RendererError,
    DIVIDER_GAP, DIVIDER_WIDTH,
};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
