//! Planar editor: interaction, session state and the render pass on top of
//! `planar-engine` and `planar-geom`.
//!
//! ```rust,ignore
//! planar_editor::Studio::new()
//!     .title("planar")
//!     .size(800.0, 600.0)
//!     .run()?;
//! ```

pub mod app;
pub mod config;
pub mod controller;
pub mod hud;
pub mod render;
pub mod session;
pub mod view;

pub use app::Studio;
pub use config::EditorConfig;
pub use controller::EditorEvent;
pub use session::Session;
