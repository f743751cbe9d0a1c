pub(crate) mod dot;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod triangle;

pub use dot::DotCmd;
pub use line::LineCmd;
pub use rect::RectCmd;
pub use triangle::TriangleCmd;
