/// Keyboard key identifier.
///
/// The platform layer maps physical key codes into these variants where
/// possible; anything else becomes `Keycode::Unknown` carrying the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Keycode {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Numeric keypad
    KpEnter,
    KpAdd,
    KpSubtract,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

/// A system event as seen by the main loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Event {
    /// The user asked the application to quit (window closed, session ending).
    Quit,
    KeyDown(Keycode),
    KeyUp(Keycode),
    /// Anything else (resize, focus, pointer motion, ...).
    Other,
}
