//! wgpu plumbing for the editor window.
//!
//! One [`Gpu`] per window. [`SurfacePrefs`] decides how the swapchain is set
//! up, frames come out as [`AcquiredFrame`], and a failed acquire resolves to
//! a [`Recovery`].

mod context;
mod frame;
mod prefs;
mod surface;

pub use context::Gpu;
pub use frame::{AcquiredFrame, Recovery};
pub use prefs::SurfacePrefs;
