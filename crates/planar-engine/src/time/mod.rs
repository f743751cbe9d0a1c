//! Redraw pacing for the runtime loop.

mod pacer;

pub use pacer::FramePacer;
