use crate::app::dropdown::{ClickOutcome, ClickTarget};
use crate::app::filter::{pop_grapheme, FilterForm};
use crate::app::grid::ItemsGrid;
use crate::app::settings::Settings;
use crate::app::types::{Character, Focus, SelectKind};
use crate::input::pointer::PointerBus;

/// Whole-application state. Rendering reads it; handlers mutate it.
#[derive(Debug)]
pub struct App {
    pub grid: ItemsGrid,
    pub filter: FilterForm,
    pub focus: Focus,
    /// Outside-click listeners for open dropdowns.
    pub pointer: PointerBus<SelectKind>,
    pub settings: Settings,
    pub should_quit: bool,
}

impl App {
    pub fn new(characters: Vec<Character>, settings: Settings) -> Self {
        App {
            grid: ItemsGrid::new(characters),
            filter: FilterForm::new(),
            focus: Focus::Grid,
            pointer: PointerBus::new(),
            settings,
            should_quit: false,
        }
    }

    /// Route a click on a dropdown button to the matching dropdown.
    pub fn click_select(&mut self, kind: SelectKind, target: ClickTarget) -> ClickOutcome {
        self.focus = Focus::Select(kind);
        self.filter.select_mut(kind).click(&self.pointer, target)
    }

    /// Commit option `index` of an open dropdown.
    pub fn choose_option(&mut self, kind: SelectKind, index: usize) {
        self.filter.select_mut(kind).choose(index);
    }

    /// Pointer-down dispatch to every active outside-click listener.
    /// `inside` reports whether the point lies within a dropdown's region.
    pub fn dispatch_pointer_down<F>(&mut self, inside: F)
    where
        F: Fn(SelectKind) -> bool,
    {
        for kind in self.pointer.listeners() {
            if !inside(kind) && self.filter.select_mut(kind).outside_click() {
                tracing::debug!(?kind, "dropdown dismissed by outside click");
            }
        }
    }

    pub fn close_selects(&mut self) {
        for kind in SelectKind::ALL {
            self.filter.select_mut(kind).close();
        }
    }

    pub fn apply_filter(&mut self) {
        self.close_selects();
        self.filter.apply();
    }

    pub fn reset_filter(&mut self) {
        self.filter.reset();
    }

    /// Text field bound to the focused input, if any.
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Name => Some(&mut self.filter.name),
            Focus::Kind => Some(&mut self.filter.kind),
            _ => None,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.focused_text_mut() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            pop_grapheme(field);
        }
    }

    pub fn focus_next(&mut self) {
        self.close_selects();
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.close_selects();
        self.focus = self.focus.prev();
    }
}
