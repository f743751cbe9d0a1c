//! Planar viewer: a small lit 3D scene (cube and pyramid) drawn through the
//! `planar-engine` draw list.
//!
//! Geometry is lit and projected on the CPU with `glam`; the engine only
//! sees 2D triangles, lines and dots.
//!
//! ```rust,ignore
//! planar_viewer::Viewer::new().size(1000.0, 700.0).run()?;
//! ```

pub mod app;
pub mod camera;
pub mod controller;
pub mod lighting;
pub mod mesh;
pub mod object;
pub mod project;
pub mod render;
pub mod session;

pub use app::Viewer;
pub use controller::ViewerEvent;
pub use session::ViewerSession;
