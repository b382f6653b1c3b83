//! Main event loop.
//!
//! A two-state machine (`Running` -> `Stopped`) driven by draining a
//! non-blocking [`EventSource`](crate::input::EventSource) once per iteration.

mod config;
mod main_loop;
mod state;

pub use config::LoopConfig;
pub use main_loop::{LoopStats, MainLoop};
pub use state::{LoopState, STOP_KEY};
