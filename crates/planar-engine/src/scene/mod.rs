//! Per-frame draw list in logical pixels.
//!
//! The editor and the viewer record lines, dots, solid rects and triangles
//! here each frame; the renderers in `render::shapes` pick out their own
//! command kind in paint order.

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
