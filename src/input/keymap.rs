use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::bindings::{Button, Trigger};

/// A terminal key press translated into controller terms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Button(Button),
    Trigger(Trigger),
    /// Ctrl-C: leave regardless of mode or display state.
    Interrupt,
}

/// Map a key press to controller input. Releases, repeats and unbound keys
/// map to `None`.
pub fn map_key(key: &KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyInput::Interrupt),
            _ => None,
        };
    }

    let button = match key.code {
        KeyCode::Up => Button::Up,
        KeyCode::Down => Button::Down,
        KeyCode::Left => Button::Left,
        KeyCode::Right => Button::Right,
        KeyCode::Enter | KeyCode::Char('a') => Button::A,
        KeyCode::Backspace | KeyCode::Esc | KeyCode::Char('b') => Button::B,
        KeyCode::Char('x') => Button::X,
        KeyCode::Char('y') => Button::Y,
        KeyCode::Char(' ') | KeyCode::Char('p') => Button::Start,
        KeyCode::Char('q') => Button::Select,
        KeyCode::Char('m') => Button::Guide,
        KeyCode::PageUp => Button::L1,
        KeyCode::PageDown => Button::R1,
        KeyCode::Char('[') => return Some(KeyInput::Trigger(Trigger::L2)),
        KeyCode::Char(']') => return Some(KeyInput::Trigger(Trigger::R2)),
        _ => return None,
    };
    Some(KeyInput::Button(button))
}
