//! Startup sequence.
//!
//! Bootstrap (windowing, window, graphics context), the one-shot frame, then
//! the event loop. Each phase is reached only if the previous one succeeded.

mod app;
mod config;

pub use app::{run, run_demo, DemoError, Platform, StaticFrame};
pub use config::DemoConfig;
