//! LightGT engine crate.
//!
//! Window and graphics context bootstrap, a one-shot textured-quad frame and
//! the poll-driven event loop that keeps the window open.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod runloop;
pub mod window;

pub use crate::core::{run, DemoConfig, DemoError};
