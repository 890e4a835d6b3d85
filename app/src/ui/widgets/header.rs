use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ui::colors::current as current_colors;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::filter;

pub const LOGO_TITLE: &str = "charZoom";
pub const LOGO_SUBTITLE: &str = "character browser";

/// Logo on the left, filter form on the right.
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    render_logo(f, layout.logo);
    filter::render(f, &layout.filter, app);
}

fn render_logo(f: &mut Frame, area: Rect) {
    if area.width == 0 {
        return;
    }
    let colors = current_colors();
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!(" ◉ {}", LOGO_TITLE), colors.logo_style)),
        Line::from(Span::styled(format!("   {}", LOGO_SUBTITLE), colors.logo_sub_style)),
    ];
    f.render_widget(Paragraph::new(lines).style(colors.app_style), area);
}
