use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::Mutex;

use crate::ui::Theme;

/// Concrete runtime styles derived from the active [`Theme`].
#[derive(Clone, Debug)]
pub struct Colors {
    pub app_style: Style,
    pub logo_style: Style,
    pub logo_sub_style: Style,
    pub card_style: Style,
    pub card_border_style: Style,
    pub card_selected_border_style: Style,
    pub card_title_style: Style,
    pub card_title_hover_style: Style,
    pub select_style: Style,
    pub select_open_style: Style,
    pub select_placeholder_style: Style,
    pub focus_border_style: Style,
    pub border_style: Style,
    pub option_list_style: Style,
    pub option_cursor_style: Style,
    pub input_style: Style,
    pub apply_style: Style,
    pub reset_style: Style,
    pub popup_style: Style,
    pub footer_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

fn derive(theme: &Theme) -> Colors {
    let surface = Style::default().fg(theme.fg).bg(theme.surface);
    Colors {
        app_style: theme.style_fg(),
        logo_style: Style::default()
            .fg(theme.accent)
            .bg(theme.bg)
            .add_modifier(Modifier::BOLD),
        logo_sub_style: Style::default().fg(theme.muted).bg(theme.bg),
        card_style: surface,
        card_border_style: Style::default().fg(theme.muted).bg(theme.surface),
        card_selected_border_style: Style::default().fg(theme.accent).bg(theme.surface),
        card_title_style: surface.add_modifier(Modifier::BOLD),
        card_title_hover_style: Style::default()
            .fg(theme.accent)
            .bg(theme.surface)
            .add_modifier(Modifier::BOLD),
        select_style: surface,
        select_open_style: Style::default().fg(theme.fg).bg(Color::Rgb(0x33, 0x44, 0x66)),
        select_placeholder_style: Style::default().fg(theme.muted).bg(theme.surface),
        focus_border_style: Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        border_style: Style::default().fg(theme.accent),
        option_list_style: Style::default().fg(Color::Black).bg(Color::White),
        option_cursor_style: Style::default()
            .fg(Color::Black)
            .bg(Color::Rgb(0xda, 0xec, 0xc8)),
        input_style: surface,
        apply_style: Style::default().fg(Color::Rgb(0x83, 0xbf, 0x46)),
        reset_style: Style::default().fg(Color::Rgb(0xff, 0x51, 0x52)),
        popup_style: surface,
        footer_style: Style::default().fg(theme.muted).bg(theme.bg),
    }
}

pub fn set_theme(name: &str) {
    set_from_theme(&Theme::by_name(name));
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
    let mut g = CURRENT.lock().unwrap_or_else(|e| e.into_inner());
    *g = derive(theme);
}

pub fn current() -> Colors {
    CURRENT.lock().unwrap_or_else(|e| e.into_inner()).clone()
}
