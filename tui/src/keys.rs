//! Key translation — crossterm events into the console's key vocabulary.
//!
//! Only press events translate; repeat and release events are dropped so
//! terminals that report key releases do not double-type. Keys outside the
//! console's vocabulary translate to `None` and are left to the host.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use termline_core::console::{KeyInput, Modifiers};


/// Convert a crossterm `KeyEvent` into the console's `(key, modifiers)` pair.
pub fn translate(event: &KeyEvent) -> Option<(KeyInput, Modifiers)> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let modifiers = if event.modifiers.contains(KeyModifiers::CONTROL) {
        Modifiers::ctrl()
    } else {
        Modifiers::none()
    };
    let key = match event.code {
        KeyCode::Char(ch) => KeyInput::Char(ch),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Tab => KeyInput::Tab,
        KeyCode::Esc => KeyInput::Escape,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Delete => KeyInput::Delete,
        KeyCode::Up => KeyInput::Up,
        KeyCode::Down => KeyInput::Down,
        KeyCode::Left => KeyInput::Left,
        KeyCode::Right => KeyInput::Right,
        KeyCode::Home => KeyInput::Home,
        KeyCode::End => KeyInput::End,
        KeyCode::PageUp => KeyInput::PageUp,
        KeyCode::PageDown => KeyInput::PageDown,
        _ => return None,
    };
    Some((key, modifiers))
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
