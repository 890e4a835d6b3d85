pub mod keyboard;
pub mod mouse;
pub mod pointer;

pub use keyboard::{is_printable_key, KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

/// Terminal events the runner cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(mouse::MouseEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Key release/repeat reports (Windows, kitty protocol) are ignored.
            Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
            Event::Mouse(m) => InputEvent::Mouse(m.into()),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event (blocks until one is available).
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
