use ratatui::Frame;

use crate::app::App;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::card;

/// Draw every visible card. An empty collection draws nothing.
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    if app.grid.is_empty() {
        return;
    }
    for (index, area) in &layout.cards {
        if let Some(c) = app.grid.card(*index) {
            let selected = *index == app.grid.selected && app.focus == crate::app::Focus::Grid;
            let hovered = app.grid.hovered == Some(*index);
            card::render(f, *area, &c, selected, hovered);
        }
    }
}
