use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{Event, Keycode};

/// Translates a winit `WindowEvent` into a main-loop [`Event`].
///
/// Events the loop has no use for map to `Event::Other` rather than being
/// dropped, so they are still observed by the drain.
pub fn translate_window_event(event: &WindowEvent) -> Event {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Event::Quit,
        WindowEvent::KeyboardInput { event, .. } => translate_key(event.physical_key, event.state),
        _ => Event::Other,
    }
}

/// Maps a key transition to `KeyDown` / `KeyUp`.
pub fn translate_key(key: PhysicalKey, state: ElementState) -> Event {
    let code = map_key(key);
    match state {
        ElementState::Pressed => Event::KeyDown(code),
        ElementState::Released => Event::KeyUp(code),
    }
}

pub fn map_key(pk: PhysicalKey) -> Keycode {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Keycode::Escape,
            KeyCode::Enter => Keycode::Enter,
            KeyCode::Tab => Keycode::Tab,
            KeyCode::Backspace => Keycode::Backspace,
            KeyCode::Space => Keycode::Space,

            KeyCode::ArrowUp => Keycode::ArrowUp,
            KeyCode::ArrowDown => Keycode::ArrowDown,
            KeyCode::ArrowLeft => Keycode::ArrowLeft,
            KeyCode::ArrowRight => Keycode::ArrowRight,

            KeyCode::KeyA => Keycode::A,
            KeyCode::KeyB => Keycode::B,
            KeyCode::KeyC => Keycode::C,
            KeyCode::KeyD => Keycode::D,
            KeyCode::KeyE => Keycode::E,
            KeyCode::KeyF => Keycode::F,
            KeyCode::KeyG => Keycode::G,
            KeyCode::KeyH => Keycode::H,
            KeyCode::KeyI => Keycode::I,
            KeyCode::KeyJ => Keycode::J,
            KeyCode::KeyK => Keycode::K,
            KeyCode::KeyL => Keycode::L,
            KeyCode::KeyM => Keycode::M,
            KeyCode::KeyN => Keycode::N,
            KeyCode::KeyO => Keycode::O,
            KeyCode::KeyP => Keycode::P,
            KeyCode::KeyQ => Keycode::Q,
            KeyCode::KeyR => Keycode::R,
            KeyCode::KeyS => Keycode::S,
            KeyCode::KeyT => Keycode::T,
            KeyCode::KeyU => Keycode::U,
            KeyCode::KeyV => Keycode::V,
            KeyCode::KeyW => Keycode::W,
            KeyCode::KeyX => Keycode::X,
            KeyCode::KeyY => Keycode::Y,
            KeyCode::KeyZ => Keycode::Z,

            KeyCode::Digit0 => Keycode::Digit0,
            KeyCode::Digit1 => Keycode::Digit1,
            KeyCode::Digit2 => Keycode::Digit2,
            KeyCode::Digit3 => Keycode::Digit3,
            KeyCode::Digit4 => Keycode::Digit4,
            KeyCode::Digit5 => Keycode::Digit5,
            KeyCode::Digit6 => Keycode::Digit6,
            KeyCode::Digit7 => Keycode::Digit7,
            KeyCode::Digit8 => Keycode::Digit8,
            KeyCode::Digit9 => Keycode::Digit9,

            KeyCode::NumpadEnter => Keycode::KpEnter,
            KeyCode::NumpadAdd => Keycode::KpAdd,
            KeyCode::NumpadSubtract => Keycode::KpSubtract,

            other => Keycode::Unknown(other as u32),
        },

        // NativeKeyCode has no stable numeric form in winit 0.30.
        PhysicalKey::Unidentified(_) => Keycode::Unknown(0),
    }
}
