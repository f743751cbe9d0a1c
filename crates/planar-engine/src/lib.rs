//! Window, input and GPU plumbing for the planar editor and viewer.
//!
//! An app implements [`core::App`], records a [`scene::DrawList`] each
//! frame and hands it to [`render::SceneRenderer`]; [`window::Runtime`] owns
//! the event loop and paces redraws.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
