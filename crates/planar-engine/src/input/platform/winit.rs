//! The only place winit input types are looked at.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::Window;

use crate::input::{
    InputEvent, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    PointerButtonEvent, PointerMoveEvent,
};

/// Converts the window events the editor cares about; everything else is `None`.
///
/// Button events take their position and modifiers from `state`, since winit
/// reports neither with the click.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::ModifiersChanged(m) => InputEvent::ModifiersChanged(map_modifiers(m.state())),
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = logical(window, *position);
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
        }
        WindowEvent::MouseInput { state: element, button, .. } => {
            let (x, y) = state.pointer_pos.unwrap_or_default();
            InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: if pressed(*element) { MouseButtonState::Pressed } else { MouseButtonState::Released },
                x,
                y,
                modifiers: state.modifiers,
            })
        }
        WindowEvent::KeyboardInput { event, .. } => {
            let (key, code) = map_key(event.physical_key);
            InputEvent::Key {
                key,
                state: if pressed(event.state) { KeyState::Pressed } else { KeyState::Released },
                modifiers: state.modifiers,
                code,
                repeat: event.repeat,
            }
        }
        _ => return None,
    };
    Some(ev)
}

#[inline]
fn pressed(state: ElementState) -> bool {
    state == ElementState::Pressed
}

fn logical(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let p = pos.to_logical::<f64>(window.scale_factor());
    (p.x as f32, p.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

// Parallel tables: the winit code at index i maps to the key at index i.
const LETTER_CODES: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE, KeyCode::KeyF,
    KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ, KeyCode::KeyK, KeyCode::KeyL,
    KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO, KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR,
    KeyCode::KeyS, KeyCode::KeyT, KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX,
    KeyCode::KeyY, KeyCode::KeyZ,
];
const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I, Key::J, Key::K,
    Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R, Key::S, Key::T, Key::U, Key::V,
    Key::W, Key::X, Key::Y, Key::Z,
];

const DIGIT_CODES: [KeyCode; 10] = [
    KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
    KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
];
const DIGITS: [Key; 10] = [
    Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
    Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
];

const FUNCTION_CODES: [KeyCode; 12] = [
    KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4, KeyCode::F5, KeyCode::F6,
    KeyCode::F7, KeyCode::F8, KeyCode::F9, KeyCode::F10, KeyCode::F11, KeyCode::F12,
];
const FUNCTION_KEYS: [Key; 12] = [
    Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6,
    Key::F7, Key::F8, Key::F9, Key::F10, Key::F11, Key::F12,
];

fn lookup(code: KeyCode, codes: &[KeyCode], keys: &[Key]) -> Option<Key> {
    codes.iter().position(|c| *c == code).map(|i| keys[i])
}

fn named_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Space => Key::Space,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

        // Stroke width keys work from the numpad too.
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Minus,
        KeyCode::Equal => Key::Equal,
        KeyCode::NumpadAdd => Key::Plus,

        _ => return None,
    })
}

/// Maps a physical key to the editor's [`Key`] plus its raw code.
pub(crate) fn map_key(pk: PhysicalKey) -> (Key, u32) {
    let PhysicalKey::Code(code) = pk else {
        // Native scan codes carry no portable number.
        return (Key::Unknown(0), 0);
    };
    let raw = code as u32;
    let key = named_key(code)
        .or_else(|| lookup(code, &LETTER_CODES, &LETTERS))
        .or_else(|| lookup(code, &DIGIT_CODES, &DIGITS))
        .or_else(|| lookup(code, &FUNCTION_CODES, &FUNCTION_KEYS))
        .unwrap_or(Key::Unknown(raw));
    (key, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_directly() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyC)).0, Key::C);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit4)).0, Key::Digit4);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::F12)).0, Key::F12);
    }

    #[test]
    fn numpad_signs_share_main_row_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadSubtract)).0, Key::Minus);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Minus)).0, Key::Minus);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadAdd)).0, Key::Plus);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Equal)).0, Key::Equal);
    }

    #[test]
    fn tables_line_up() {
        for (code, key) in LETTER_CODES.iter().zip(LETTERS) {
            assert_eq!(map_key(PhysicalKey::Code(*code)).0, key);
        }
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyZ)).0, Key::Z);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::F6)).0, Key::F6);
    }

    #[test]
    fn unmapped_codes_are_unknown() {
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::PageUp));
        assert_eq!(key, Key::Unknown(code));
    }

    #[test]
    fn modifiers_translate_each_flag() {
        let m = map_modifiers(ModifiersState::CONTROL | ModifiersState::SHIFT);
        assert!(m.ctrl && m.shift && !m.alt && !m.meta);
    }
}
