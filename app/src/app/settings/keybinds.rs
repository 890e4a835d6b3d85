// Centralised keybind predicates for the application.
//
// Handlers ask "is this the quit key?" rather than matching raw `KeyCode`
// patterns, so bindings live in one place.

use crate::input::{KeyCode, KeyEvent, KeyModifiers};

pub fn is_quit(code: &KeyCode) -> bool {
    is_char(code, 'q')
}

/// Ctrl-C quits from anywhere, including text inputs.
pub fn is_force_quit(ev: &KeyEvent) -> bool {
    ev.modifiers.contains(KeyModifiers::CONTROL) && is_char(&ev.code, 'c')
}

pub fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Down) || is_char(code, 'j')
}

pub fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Up) || is_char(code, 'k')
}

pub fn is_left(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Left) || is_char(code, 'h')
}

pub fn is_right(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Right) || is_char(code, 'l')
}

pub fn is_page_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::PageDown)
}

pub fn is_page_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::PageUp)
}

pub fn is_enter(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter)
}

pub fn is_esc(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Esc)
}

pub fn is_tab(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Tab)
}

pub fn is_backtab(code: &KeyCode) -> bool {
    matches!(code, KeyCode::BackTab)
}

pub fn is_backspace(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Backspace)
}

pub fn is_clear(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Delete | KeyCode::Backspace)
}

pub fn is_char(code: &KeyCode, want: char) -> bool {
    matches!(code, &KeyCode::Char(c) if c == want)
}
