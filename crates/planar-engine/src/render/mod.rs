//! wgpu renderers for the draw list.
//!
//! Positions arrive in logical pixels with a top-left origin; each shader maps
//! them to clip space through the viewport uniform. A renderer keeps its own
//! pipeline and buffers and records one pass per frame.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::SceneRenderer;
