//! Screen geometry shared by the renderer and the mouse handler, so a click
//! is always resolved against exactly what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::dropdown::{ClickTarget, VISIBLE_OPTIONS};
use crate::app::grid::columns_for;
use crate::app::types::SelectKind;
use crate::app::App;

/// Header: two rows of 3-line controls with a one-line gap.
pub const HEADER_HEIGHT: u16 = 7;
pub const CONTROL_WIDTH: u16 = 20;
pub const CONTROL_GAP: u16 = 1;
pub const FILTER_WIDTH: u16 = CONTROL_WIDTH * 3 + CONTROL_GAP * 2;
pub const BUTTON_WIDTH: u16 = 9;
/// Border, image, title, status, type, border.
pub const CARD_HEIGHT: u16 = 6;
pub const MAX_VISIBLE_OPTIONS: u16 = VISIBLE_OPTIONS as u16;
/// Width of the chevron / clear affordance at the right of a dropdown.
pub const AFFORDANCE_WIDTH: u16 = 3;

/// Rects of the filter form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLayout {
    pub selects: [(SelectKind, Rect); 3],
    pub name: Rect,
    pub kind: Rect,
    pub apply: Rect,
    pub reset: Rect,
    /// Option list of the open dropdown, drawn over everything below it.
    pub options: Option<(SelectKind, Rect)>,
}

impl FilterLayout {
    pub fn select(&self, kind: SelectKind) -> Rect {
        self.selects
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, r)| *r)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub logo: Rect,
    pub filter: FilterLayout,
    pub grid: Rect,
    pub columns: usize,
    pub visible_rows: usize,
    /// Visible cards as `(card index, rect)`.
    pub cards: Vec<(usize, Rect)>,
    pub popup: Option<Rect>,
    pub footer: Rect,
}

/// What lies under a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Select(SelectKind, ClickTarget),
    Option(SelectKind, usize),
    Name,
    Kind,
    Apply,
    Reset,
    Card(usize),
    PopupClose,
    PopupBody,
    PopupBackdrop,
    Nothing,
}

pub fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
}

/// Area of a dropdown button occupied by its trailing icon.
pub fn affordance_rect(button: Rect) -> Rect {
    let w = AFFORDANCE_WIDTH.min(button.width);
    Rect::new(button.right().saturating_sub(w + 1), button.y, w, button.height)
}

/// Close button in the popup's top border.
pub fn popup_close_rect(popup: Rect) -> Rect {
    Rect::new(popup.right().saturating_sub(5), popup.y, 3, 1)
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let scale = |len: u16, percent: u16| {
        (u32::from(len) * u32::from(percent) / 100).min(u32::from(len)) as u16
    };
    let w = scale(area.width, percent_x).max(40.min(area.width));
    let h = scale(area.height, percent_y).max(14.min(area.height));
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

fn filter_layout(area: Rect, app: &App) -> FilterLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Length(3)])
        .split(area);
    let cols = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CONTROL_WIDTH),
                Constraint::Length(CONTROL_GAP),
                Constraint::Length(CONTROL_WIDTH),
                Constraint::Length(CONTROL_GAP),
                Constraint::Length(CONTROL_WIDTH),
            ])
            .split(row)
    };
    let top = cols(rows[0]);
    let bottom = cols(rows[2]);
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(bottom[4]);

    let selects = [
        (SelectKind::Status, top[0]),
        (SelectKind::Gender, top[2]),
        (SelectKind::Species, top[4]),
    ];
    let options = app.filter.open_select().map(|kind| {
        let button = selects
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, r)| *r)
            .unwrap_or_default();
        let n = app.filter.select(kind).options().len() as u16;
        (kind, Rect::new(button.x, button.bottom(), button.width, n.min(MAX_VISIBLE_OPTIONS) + 2))
    });

    FilterLayout {
        selects,
        name: bottom[0],
        kind: bottom[2],
        apply: buttons[0],
        reset: buttons[2],
        options,
    }
}

/// Compute the whole screen layout for `area`.
pub fn compute(area: Rect, app: &App) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(FILTER_WIDTH)])
        .split(chunks[0]);

    let mut filter = filter_layout(header[1], app);
    if let Some((kind, rect)) = filter.options {
        // Keep the option list on screen.
        filter.options = Some((kind, rect.intersection(area)));
    }

    let grid = chunks[1];
    let columns = columns_for(grid.width, app.settings.card_min_width);
    let visible_rows = (grid.height / CARD_HEIGHT) as usize;
    let mut cards = Vec::new();
    if !app.grid.is_empty() && grid.width > 0 {
        let card_width = grid.width / columns as u16;
        let first = app.grid.offset_row * columns;
        let last = (first + visible_rows * columns).min(app.grid.len());
        for index in first..last {
            let slot = index - first;
            let col = (slot % columns) as u16;
            let row = (slot / columns) as u16;
            cards.push((
                index,
                Rect::new(
                    grid.x + col * card_width,
                    grid.y + row * CARD_HEIGHT,
                    card_width,
                    CARD_HEIGHT,
                ),
            ));
        }
    }

    let popup = if app.grid.popup().visible && !app.grid.is_empty() {
        Some(centered(area, 60, 60))
    } else {
        None
    };

    ScreenLayout {
        logo: header[0],
        filter,
        grid,
        columns,
        visible_rows,
        cards,
        popup,
        footer: chunks[2],
    }
}

impl ScreenLayout {
    /// Whether a point lies inside a dropdown's region: its button plus its
    /// option list when open.
    pub fn inside_select(&self, kind: SelectKind, column: u16, row: u16) -> bool {
        if contains(self.filter.select(kind), column, row) {
            return true;
        }
        matches!(self.filter.options, Some((k, r)) if k == kind && contains(r, column, row))
    }

    /// Resolve what a click at (`column`, `row`) lands on. `option_offset`
    /// is the first visible option of the open list.
    pub fn hit_test(&self, column: u16, row: u16, option_offset: usize) -> Hit {
        if let Some(popup) = self.popup {
            if contains(popup_close_rect(popup), column, row) {
                return Hit::PopupClose;
            }
            if contains(popup, column, row) {
                return Hit::PopupBody;
            }
            return Hit::PopupBackdrop;
        }
        if let Some((kind, list)) = self.filter.options {
            if contains(list, column, row) {
                // Rows inside the border map to options.
                if row > list.y && row + 1 < list.bottom() {
                    return Hit::Option(kind, option_offset + (row - list.y - 1) as usize);
                }
                return Hit::Nothing;
            }
        }
        for (kind, rect) in &self.filter.selects {
            if contains(*rect, column, row) {
                let target = if contains(affordance_rect(*rect), column, row) {
                    ClickTarget::Affordance
                } else {
                    ClickTarget::Surface
                };
                return Hit::Select(*kind, target);
            }
        }
        let fl = &self.filter;
        if contains(fl.name, column, row) {
            return Hit::Name;
        }
        if contains(fl.kind, column, row) {
            return Hit::Kind;
        }
        if contains(fl.apply, column, row) {
            return Hit::Apply;
        }
        if contains(fl.reset, column, row) {
            return Hit::Reset;
        }
        self.cards
            .iter()
            .find(|(_, r)| contains(*r, column, row))
            .map(|(i, _)| Hit::Card(*i))
            .unwrap_or(Hit::Nothing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::Settings;
    use crate::app::types::Character;

    fn app(n: usize) -> App {
        let chars = (0..n)
            .map(|i| Character::new(format!("c{}", i), "Human", "", "Male", "Alive", "", ""))
            .collect();
        App::new(chars, Settings::default())
    }

    #[test]
    fn cards_fill_columns_then_rows() {
        let app = app(5);
        let l = compute(Rect::new(0, 0, 100, 30), &app);
        assert_eq!(l.columns, 3);
        assert_eq!(l.visible_rows, (30 - HEADER_HEIGHT as usize - 1) / CARD_HEIGHT as usize);
        assert_eq!(l.cards.len(), 5);
        assert_eq!(l.cards[3].1.y, l.cards[0].1.y + CARD_HEIGHT);
        assert_eq!(l.cards[1].1.x, l.cards[0].1.x + 33);
    }

    #[test]
    fn empty_collection_has_no_cards() {
        let l = compute(Rect::new(0, 0, 100, 30), &app(0));
        assert!(l.cards.is_empty());
        assert!(l.popup.is_none());
    }

    #[test]
    fn popup_fits_very_wide_screens() {
        let mut app = app(1);
        app.grid.click_card(0);
        let area = Rect::new(0, 0, 2000, 50);
        let popup = compute(area, &app).popup.unwrap();
        assert_eq!(popup.width, 1200);
        assert_eq!(popup.x, 400);
        assert!(popup.bottom() <= area.bottom());
    }

    #[test]
    fn hit_test_resolves_controls() {
        let app = app(1);
        let l = compute(Rect::new(0, 0, 100, 30), &app);
        let status = l.filter.select(SelectKind::Status);
        assert_eq!(
            l.hit_test(status.x + 1, status.y + 1, 0),
            Hit::Select(SelectKind::Status, ClickTarget::Surface)
        );
        let aff = affordance_rect(status);
        assert_eq!(
            l.hit_test(aff.x, status.y + 1, 0),
            Hit::Select(SelectKind::Status, ClickTarget::Affordance)
        );
        assert_eq!(l.hit_test(l.filter.reset.x, l.filter.reset.y, 0), Hit::Reset);
        let card = l.cards[0].1;
        assert_eq!(l.hit_test(card.x + 2, card.y + 2, 0), Hit::Card(0));
        assert_eq!(l.hit_test(0, 0, 0), Hit::Nothing);
    }
}
