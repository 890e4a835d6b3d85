use ratatui::backend::Backend;
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal};

use crate::app::App;

pub mod colors;
pub mod layout;
pub mod themes;
pub mod widgets;

pub use layout::{compute as compute_layout, Hit, ScreenLayout};
pub use themes::Theme;

/// Draw one full frame: header, card grid, footer, then the overlays
/// (open option list, popup) on top.
pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();
    let layout = layout::compute(area, app);
    let colors = colors::current();

    f.render_widget(Block::default().style(colors.app_style), area);
    widgets::header::render(f, &layout, app);
    widgets::grid::render(f, &layout, app);
    widgets::footer::render(f, layout.footer, app);

    widgets::filter::render_overlay(f, &layout.filter, app);
    if let Some(popup) = layout.popup {
        widgets::popup::render(f, popup, app.grid.popup());
    }
}

/// Draw one frame using the provided Terminal.
pub fn draw_frame<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> std::io::Result<()> {
    terminal.draw(|f| ui(f, app)).map(|_| ())
}
