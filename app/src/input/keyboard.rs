// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convenience: check if a `KeyEvent` is a printable character without
/// control/alt modifiers.
pub fn is_printable_key(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Char(_))
        && !ev
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_chars_are_not_printable() {
        assert!(is_printable_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(is_printable_key(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)));
        assert!(!is_printable_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_printable_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
