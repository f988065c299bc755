//! Stable names for physical keys.
//!
//! Scripts compare against these strings, so they are spelled out here rather
//! than taken from `Debug` output. Names follow the W3C `KeyboardEvent.code`
//! values. Keys without an entry are reported as `"Unidentified"`.

use winit::keyboard::KeyCode;

pub const UNIDENTIFIED: &str = "Unidentified";

macro_rules! key_names {
    ($($key:ident)*) => {
        /// Script-visible name of `code`.
        pub fn key_name(code: KeyCode) -> &'static str {
            match code {
                $(KeyCode::$key => stringify!($key),)*
                _ => UNIDENTIFIED,
            }
        }
    };
}

key_names! {
    KeyA KeyB KeyC KeyD KeyE KeyF KeyG KeyH KeyI KeyJ KeyK KeyL KeyM
    KeyN KeyO KeyP KeyQ KeyR KeyS KeyT KeyU KeyV KeyW KeyX KeyY KeyZ
    Digit0 Digit1 Digit2 Digit3 Digit4 Digit5 Digit6 Digit7 Digit8 Digit9
    Backquote Backslash BracketLeft BracketRight Comma Equal Minus Period
    Quote Semicolon Slash IntlBackslash
    AltLeft AltRight ControlLeft ControlRight ShiftLeft ShiftRight SuperLeft SuperRight
    Backspace CapsLock ContextMenu Enter Space Tab Escape
    Delete End Home Insert PageDown PageUp
    ArrowDown ArrowLeft ArrowRight ArrowUp
    NumLock Numpad0 Numpad1 Numpad2 Numpad3 Numpad4 Numpad5 Numpad6 Numpad7 Numpad8 Numpad9
    NumpadAdd NumpadSubtract NumpadMultiply NumpadDivide NumpadDecimal NumpadEnter NumpadEqual
    PrintScreen ScrollLock Pause
    F1 F2 F3 F4 F5 F6 F7 F8 F9 F10 F11 F12
}
