//! Screen-space types: logical pixels, origin top-left, +Y down.
//!
//! World coordinates (Y up) live in the editor; this is what the draw list
//! and shaders see.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
