//! Pure 2D geometry for the planar editor.
//!
//! - [`predicates`]: outline proximity tests used for picking
//! - [`clip`]: line clipping and outline classification against a window
//! - [`shape`]: the shape model (points, segments, rectangles, ellipses)
//! - [`transform`]: pivot-based translate / rotate / scale
//!
//! World space is Y-up and measured in `f64` units. Nothing in this crate
//! touches the GPU or the windowing system.

pub mod clip;
pub mod color;
pub mod point;
pub mod predicates;
pub mod shape;
pub mod transform;

pub use clip::{ClipAlgorithm, ClipBounds, RegionClass};
pub use color::Rgb;
pub use point::Point2;
pub use shape::{Ellipse, Geometry, RectShape, Shape, ShapeId, ShapeKind, Stroke};
pub use transform::{Transform, TransformError};
