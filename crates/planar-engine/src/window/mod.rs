//! The winit event loop hosting the editor window.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
