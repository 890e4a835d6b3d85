use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::types::{Character, PopupSettings};
use crate::ui::colors::current as current_colors;
use crate::ui::layout::popup_close_rect;
use crate::ui::widgets::card::{status_line, title_line};

/// Plain-text detail rows for a character.
pub fn detail_lines(c: &Character) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Gender: {}", c.gender));
    lines.push(format!("Species: {}", c.species));
    if !c.kind.is_empty() {
        lines.push(format!("Type: {}", c.kind));
    }
    if let Some(o) = &c.origin {
        lines.push(format!("Origin: {}", o.name));
    }
    if let Some(l) = &c.location {
        lines.push(format!("Last location: {}", l.name));
    }
    if !c.episode.is_empty() {
        lines.push(format!("Episodes: {}", c.episode.len()));
    }
    lines.push(format!("Image: {}", c.image));
    lines.push(format!("Created: {}", c.created));
    lines
}

/// Draw the detail overlay when `settings` is visible with content.
pub fn render(f: &mut Frame, area: Rect, settings: &PopupSettings) {
    let Some(c) = settings.content.as_ref().filter(|_| settings.visible) else {
        return;
    };
    let colors = current_colors();
    let inner_width = area.width.saturating_sub(2).max(1) as usize;

    let mut lines = vec![
        title_line(&c.name, &c.gender, colors.popup_style.add_modifier(Modifier::BOLD)),
        status_line(&c.status, &c.species, colors.popup_style),
        Line::default(),
    ];
    for row in detail_lines(c) {
        // Long URLs are wrapped instead of clipped.
        for part in textwrap::wrap(&row, inner_width) {
            lines.push(Line::from(Span::styled(part.into_owned(), colors.popup_style)));
        }
    }

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .border_style(colors.border_style)
        .style(colors.popup_style);
    f.render_widget(Paragraph::new(lines).block(block), area);
    f.render_widget(
        Paragraph::new("[x]").style(colors.reset_style),
        popup_close_rect(area),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::Place;

    #[test]
    fn optional_fields_only_when_present() {
        let mut c = Character::new("Rick", "Human", "", "Male", "Alive", "img", "t");
        let lines = detail_lines(&c);
        assert!(!lines.iter().any(|l| l.starts_with("Type:")));
        assert!(!lines.iter().any(|l| l.starts_with("Origin:")));

        c.kind = "Clone".into();
        c.origin = Some(Place { name: "Earth".into(), url: String::new() });
        let lines = detail_lines(&c);
        assert!(lines.contains(&"Type: Clone".to_string()));
        assert!(lines.contains(&"Origin: Earth".to_string()));
    }
}
