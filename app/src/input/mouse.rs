pub use crossterm::event::{MouseButton, MouseEventKind};

/// Mouse event reduced to what hit-testing needs (modifiers dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub kind: MouseEventKind,
}

impl MouseEvent {
    pub fn left_down(column: u16, row: u16) -> Self {
        MouseEvent {
            column,
            row,
            kind: MouseEventKind::Down(MouseButton::Left),
        }
    }

    pub fn moved(column: u16, row: u16) -> Self {
        MouseEvent {
            column,
            row,
            kind: MouseEventKind::Moved,
        }
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(m: crossterm::event::MouseEvent) -> Self {
        MouseEvent {
            column: m.column,
            row: m.row,
            kind: m.kind,
        }
    }
}
