use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ui::colors::current as current_colors;

pub const HELP: &str = "Tab:focus  ↑/↓/←/→:move  Enter:open/select  Del:clear  Esc:close  q:quit";

/// Help line plus the card count.
pub fn footer_text(app: &App) -> String {
    format!("{}  |  {} characters", HELP, app.grid.len())
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    f.render_widget(Paragraph::new(footer_text(app)).style(colors.footer_style), area);
}
