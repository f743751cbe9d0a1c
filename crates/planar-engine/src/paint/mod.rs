//! Colors as the renderers consume them.

pub mod color;

pub use color::Color;
