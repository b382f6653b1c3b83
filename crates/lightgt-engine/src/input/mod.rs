//! Input events.
//!
//! [`Event`] and [`Keycode`] are platform-agnostic; the translation functions
//! are the only place winit event types are inspected.

mod source;
mod translate;
mod types;

pub use source::EventSource;
pub use translate::{map_key, translate_key, translate_window_event};
pub use types::{Event, Keycode};
