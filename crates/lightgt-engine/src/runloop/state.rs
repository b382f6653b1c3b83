use crate::input::{Event, Keycode};

/// Key that ends the program when pressed.
pub const STOP_KEY: Keycode = Keycode::KpEnter;

/// Main loop state. `Stopped` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Stopped,
}

impl LoopState {
    /// Applies one event.
    ///
    /// Only `Quit` and a key-down of [`STOP_KEY`] change the state; everything
    /// else, resize included, is observed and ignored.
    pub fn on_event(self, event: &Event) -> LoopState {
        match (self, event) {
            (LoopState::Stopped, _) => LoopState::Stopped,
            (_, Event::Quit) => LoopState::Stopped,
            (_, Event::KeyDown(key)) if *key == STOP_KEY => LoopState::Stopped,
            (state, _) => state,
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}
