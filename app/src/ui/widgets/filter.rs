use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::dropdown::{capitalize, Dropdown};
use crate::app::types::Focus;
use crate::app::App;
use crate::ui::colors::{current as current_colors, Colors};
use crate::ui::layout::{affordance_rect, FilterLayout};

fn control_block(colors: &Colors, focused: bool) -> Block<'static> {
    Block::default().borders(Borders::ALL).border_style(if focused {
        colors.focus_border_style
    } else {
        colors.border_style
    })
}

/// Icon at the right of a dropdown button.
pub fn affordance_glyph(dd: &Dropdown) -> &'static str {
    if dd.selected().is_some() {
        "✕"
    } else if dd.is_open() {
        "▴"
    } else {
        "▾"
    }
}

fn render_select(f: &mut Frame, area: Rect, dd: &Dropdown, focused: bool) {
    let colors = current_colors();
    let base = if dd.is_open() {
        colors.select_open_style
    } else {
        colors.select_style
    };
    let label = match dd.selected() {
        Some(v) => Span::styled(v.to_string(), base),
        None => {
            let muted = colors.select_placeholder_style.fg.unwrap_or(Color::Gray);
            Span::styled(dd.kind().placeholder(), base.fg(muted))
        }
    };
    let block = control_block(&colors, focused).style(base);
    f.render_widget(Paragraph::new(Line::from(label)).block(block), area);

    let icon = affordance_rect(area);
    let icon_row = Rect::new(icon.x, icon.y + 1, icon.width, 1.min(icon.height));
    f.render_widget(
        Paragraph::new(format!(" {}", affordance_glyph(dd))).style(base),
        icon_row,
    );
}

fn render_input(f: &mut Frame, area: Rect, value: &str, placeholder: &str, focused: bool) {
    let colors = current_colors();
    let text = if value.is_empty() {
        Span::styled(placeholder.to_string(), colors.select_placeholder_style)
    } else {
        Span::styled(value.to_string(), colors.input_style)
    };
    let mut line = Line::from(text);
    if focused {
        line.spans.push(Span::styled("▏", colors.input_style));
    }
    let block = control_block(&colors, focused).style(colors.input_style);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_button(f: &mut Frame, area: Rect, label: &str, style: Style, focused: bool) {
    let style = if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    let block = Block::default().borders(Borders::ALL).border_style(style);
    f.render_widget(Paragraph::new(label.to_string()).style(style).block(block), area);
}

/// Draw the option list of an open dropdown. Called after everything else
/// so it overlays the grid.
pub fn render_options(f: &mut Frame, area: Rect, dd: &Dropdown) {
    let colors = current_colors();
    let items: Vec<ListItem> = dd
        .options()
        .iter()
        .enumerate()
        .map(|(i, o)| {
            let mut style = colors.option_list_style;
            if dd.chosen_option() == Some(i) {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(capitalize(o)).style(style)
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).style(colors.option_list_style))
        .highlight_style(colors.option_cursor_style);
    let mut state = ListState::default().with_offset(dd.offset);
    state.select(Some(dd.cursor));
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

/// Draw the filter form (without the open option list).
pub fn render(f: &mut Frame, fl: &FilterLayout, app: &App) {
    let colors = current_colors();
    for (kind, rect) in &fl.selects {
        render_select(f, *rect, app.filter.select(*kind), app.focus == Focus::Select(*kind));
    }
    render_input(f, fl.name, &app.filter.name, "Name", app.focus == Focus::Name);
    render_input(f, fl.kind, &app.filter.kind, "Type", app.focus == Focus::Kind);
    render_button(f, fl.apply, "Apply", colors.apply_style, app.focus == Focus::Apply);
    render_button(f, fl.reset, "Reset", colors.reset_style, app.focus == Focus::Reset);
}

/// Option list overlay for whichever dropdown is open.
pub fn render_overlay(f: &mut Frame, fl: &FilterLayout, app: &App) {
    if let Some((kind, rect)) = fl.options {
        let dd: &Dropdown = app.filter.select(kind);
        if dd.is_open() {
            render_options(f, rect, dd);
        }
    }
}
