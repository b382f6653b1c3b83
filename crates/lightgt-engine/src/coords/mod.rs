//! Small geometry types used to build the quad and its texture mapping.
//!
//! Clip space is [-1, 1] on both axes with +Y up; texture space is [0, 1] with
//! v = 0 on the first uploaded row.

mod rect;
mod viewport;

pub use rect::RectF;
pub use viewport::Viewport;
