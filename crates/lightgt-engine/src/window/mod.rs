//! Window + windowing subsystem.
//!
//! Owns the winit event loop and the single application window, and exposes the
//! OS queue as a non-blocking [`EventSource`](crate::input::EventSource).

mod config;
mod platform;

pub use config::{centered_position, WindowConfig};
pub use platform::{native_handle, native_handle_kind, WinitPlatform};
