use crate::app::types::SelectKind;
use crate::input::pointer::{PointerBus, PointerSubscription};

/// Options shown at once in an open list.
pub const VISIBLE_OPTIONS: usize = 7;

/// Interaction state of a dropdown. The open state owns the outside-click
/// subscription so the listener cannot outlive it.
#[derive(Debug)]
pub enum DropdownState {
    Closed,
    Open(PointerSubscription),
}

/// Part of the dropdown button that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The button itself (label area).
    Surface,
    /// The trailing icon: chevron when empty, clear cross when a value is set.
    Affordance,
}

/// Result of a click on the dropdown button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Opened,
    Closed,
    Cleared,
    Ignored,
}

/// Single-selection control (status, gender or species).
#[derive(Debug)]
pub struct Dropdown {
    kind: SelectKind,
    options: &'static [&'static str],
    selected: Option<String>,
    chosen: Option<usize>,
    /// Keyboard cursor within the option list while open.
    pub cursor: usize,
    /// Index of the first visible option.
    pub offset: usize,
    state: DropdownState,
}

impl Dropdown {
    pub fn new(kind: SelectKind, options: &'static [&'static str]) -> Self {
        Dropdown {
            kind,
            options,
            selected: None,
            chosen: None,
            cursor: 0,
            offset: 0,
            state: DropdownState::Closed,
        }
    }

    pub fn kind(&self) -> SelectKind {
        self.kind
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DropdownState::Open(_))
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Index of the option matching the selected value, if any.
    pub fn chosen_option(&self) -> Option<usize> {
        self.chosen
    }

    /// Replace the selected value and recompute the highlighted option.
    pub fn set_selected(&mut self, value: Option<String>) {
        self.chosen = value.as_deref().and_then(|v| {
            self.options
                .iter()
                .position(|o| o.to_lowercase() == v.to_lowercase())
        });
        self.selected = value;
    }

    /// Handle a click on the button.
    ///
    /// With a value selected only the affordance reacts (it clears the value
    /// and closes); the label area is inert until the value is cleared.
    pub fn click(&mut self, bus: &PointerBus<SelectKind>, target: ClickTarget) -> ClickOutcome {
        if self.selected.is_some() {
            return match target {
                ClickTarget::Affordance => {
                    self.set_selected(None);
                    self.close();
                    tracing::debug!(kind = ?self.kind, "dropdown cleared");
                    ClickOutcome::Cleared
                }
                ClickTarget::Surface => ClickOutcome::Ignored,
            };
        }
        if self.is_open() {
            self.close();
            ClickOutcome::Closed
        } else {
            self.open(bus);
            ClickOutcome::Opened
        }
    }

    /// Commit the option at `index` and close. Ignored while closed.
    pub fn choose(&mut self, index: usize) -> Option<&str> {
        if !self.is_open() {
            return None;
        }
        let label = capitalize(self.options.get(index)?);
        tracing::debug!(kind = ?self.kind, value = %label, "dropdown option committed");
        self.set_selected(Some(label));
        self.close();
        self.selected()
    }

    /// Commit the option under the keyboard cursor.
    pub fn choose_cursor(&mut self) -> Option<&str> {
        self.choose(self.cursor)
    }

    /// Pointer-down landed outside the dropdown's region. Returns whether
    /// the dropdown was open.
    pub fn outside_click(&mut self) -> bool {
        if self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        // Replacing the state drops the subscription guard.
        self.state = DropdownState::Closed;
    }

    /// Clear the value and close, regardless of the current state.
    pub fn reset(&mut self) {
        self.set_selected(None);
        self.close();
    }

    fn open(&mut self, bus: &PointerBus<SelectKind>) {
        self.cursor = self.chosen.unwrap_or(0);
        self.offset = 0;
        self.ensure_cursor_visible(VISIBLE_OPTIONS);
        self.state = DropdownState::Open(bus.subscribe(self.kind));
    }

    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Keep the cursor inside a window of `height` visible options.
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            self.offset = 0;
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
        let max_offset = self.options.len().saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }
}

/// Uppercase the first letter of every word, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: &[&str] = &["alive", "dead", "unknown"];

    fn setup() -> (PointerBus<SelectKind>, Dropdown) {
        (PointerBus::new(), Dropdown::new(SelectKind::Status, OPTS))
    }

    #[test]
    fn surface_click_toggles_when_empty() {
        let (bus, mut dd) = setup();
        assert_eq!(dd.click(&bus, ClickTarget::Surface), ClickOutcome::Opened);
        assert!(dd.is_open());
        assert_eq!(bus.listener_count(), 1);
        assert_eq!(dd.click(&bus, ClickTarget::Surface), ClickOutcome::Closed);
        assert!(!dd.is_open());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn choose_commits_capitalised_label_and_closes() {
        let (bus, mut dd) = setup();
        dd.click(&bus, ClickTarget::Surface);
        assert_eq!(dd.choose(1), Some("Dead"));
        assert!(!dd.is_open());
        assert_eq!(dd.chosen_option(), Some(1));
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn choose_while_closed_is_ignored() {
        let (_bus, mut dd) = setup();
        assert_eq!(dd.choose(0), None);
        assert_eq!(dd.selected(), None);
    }

    #[test]
    fn surface_click_with_selection_does_not_reopen() {
        let (bus, mut dd) = setup();
        dd.click(&bus, ClickTarget::Surface);
        dd.choose(0);
        assert_eq!(dd.click(&bus, ClickTarget::Surface), ClickOutcome::Ignored);
        assert!(!dd.is_open());
        assert_eq!(dd.selected(), Some("Alive"));
    }

    #[test]
    fn affordance_clears_selection() {
        let (bus, mut dd) = setup();
        dd.click(&bus, ClickTarget::Surface);
        dd.choose(2);
        assert_eq!(dd.click(&bus, ClickTarget::Affordance), ClickOutcome::Cleared);
        assert_eq!(dd.selected(), None);
        assert_eq!(dd.chosen_option(), None);
        assert!(!dd.is_open());
    }

    #[test]
    fn affordance_without_selection_toggles() {
        let (bus, mut dd) = setup();
        assert_eq!(dd.click(&bus, ClickTarget::Affordance), ClickOutcome::Opened);
    }

    #[test]
    fn outside_click_closes_without_touching_value() {
        let (bus, mut dd) = setup();
        dd.set_selected(Some("Dead".into()));
        dd.set_selected(None);
        dd.click(&bus, ClickTarget::Surface);
        assert!(dd.outside_click());
        assert!(!dd.is_open());
        assert_eq!(dd.selected(), None);
        assert!(!dd.outside_click());
    }

    #[test]
    fn chosen_lookup_is_case_insensitive() {
        let (_bus, mut dd) = setup();
        dd.set_selected(Some("UNKNOWN".into()));
        assert_eq!(dd.chosen_option(), Some(2));
        dd.set_selected(Some("zombie".into()));
        assert_eq!(dd.chosen_option(), None);
    }

    #[test]
    fn dropping_open_dropdown_releases_listener() {
        let (bus, mut dd) = setup();
        dd.click(&bus, ClickTarget::Surface);
        assert_eq!(bus.listener_count(), 1);
        drop(dd);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn cursor_window_follows_cursor() {
        let (bus, mut dd) = setup();
        dd.click(&bus, ClickTarget::Surface);
        dd.cursor_next();
        dd.cursor_next();
        dd.cursor_next();
        assert_eq!(dd.cursor, 2);
        dd.ensure_cursor_visible(2);
        assert_eq!(dd.offset, 1);
        dd.cursor_prev();
        dd.cursor_prev();
        dd.ensure_cursor_visible(2);
        assert_eq!(dd.offset, 0);
    }

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("poopybutthole"), "Poopybutthole");
        assert_eq!(capitalize("mythological creature"), "Mythological Creature");
    }
}
