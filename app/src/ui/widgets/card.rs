use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::dropdown::capitalize;
use crate::app::grid::Card;
use crate::app::types::{Gender, Status};
use crate::ui::colors::current as current_colors;

/// Glyph and colour shown next to a character's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderIcon {
    pub glyph: &'static str,
    pub color: Color,
    pub title: &'static str,
}

pub const MALE_COLOR: Color = Color::Rgb(0x33, 0xb3, 0xc8);
pub const FEMALE_COLOR: Color = Color::Rgb(0xff, 0xc0, 0xcb);
pub const GENDERLESS_COLOR: Color = Color::Rgb(0x99, 0x99, 0x99);

pub const ALIVE_COLOR: Color = Color::Rgb(0x83, 0xbf, 0x46);
pub const DEAD_COLOR: Color = Color::Rgb(0xff, 0x51, 0x52);
pub const OTHER_STATUS_COLOR: Color = Color::Rgb(0x96, 0x8c, 0x9d);
pub const TYPE_COLOR: Color = Color::Rgb(0xdd, 0xdd, 0xdd);

pub fn gender_icon(gender: &Gender) -> Option<GenderIcon> {
    let genderless = GenderIcon {
        glyph: "⚲",
        color: GENDERLESS_COLOR,
        title: "Genderless",
    };
    match gender {
        Gender::Male => Some(GenderIcon {
            glyph: "♂",
            color: MALE_COLOR,
            title: "Male",
        }),
        Gender::Female => Some(GenderIcon {
            glyph: "♀",
            color: FEMALE_COLOR,
            title: "Female",
        }),
        Gender::Genderless | Gender::Unknown => Some(genderless),
        Gender::Other(_) => None,
    }
}

pub fn status_color(status: &Status) -> Color {
    match status {
        Status::Alive => ALIVE_COLOR,
        Status::Dead => DEAD_COLOR,
        _ => OTHER_STATUS_COLOR,
    }
}

/// Name followed by the gender icon, if any.
pub fn title_line(name: &str, gender: &Gender, name_style: Style) -> Line<'static> {
    let mut spans = vec![Span::styled(name.to_string(), name_style)];
    if let Some(icon) = gender_icon(gender) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(icon.glyph, name_style.fg(icon.color)));
    }
    Line::from(spans)
}

/// `● Status - Species` with the dot coloured by status.
pub fn status_line(status: &Status, species: &str, base: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled("● ", base.fg(status_color(status))),
        Span::styled(capitalize(&status.to_string()), base),
        Span::styled(" - ", base),
        Span::styled(species.to_string(), base),
    ])
}

/// Draw one card. `selected` marks the keyboard selection; `hovered`
/// highlights the title like a pointer hover.
pub fn render(f: &mut Frame, area: Rect, card: &Card<'_>, selected: bool, hovered: bool) {
    let colors = current_colors();
    let c = card.character;
    let border = if selected {
        colors.card_selected_border_style
    } else {
        colors.card_border_style
    };
    let title_style = if hovered {
        colors.card_title_hover_style
    } else {
        colors.card_title_style
    };

    let image = if c.image.is_empty() {
        "▣ (no image)".to_string()
    } else {
        format!("▣ {}", c.image)
    };
    let mut lines = vec![
        Line::from(Span::styled(image, colors.card_style.fg(GENDERLESS_COLOR))),
        title_line(&c.name, &c.gender, title_style),
        status_line(&c.status, &c.species, colors.card_style),
    ];
    if !c.kind.is_empty() {
        lines.push(Line::from(Span::styled(
            c.kind.clone(),
            colors.card_style.fg(TYPE_COLOR),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(colors.card_style);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_mapping() {
        assert_eq!(gender_icon(&Gender::Male).map(|i| i.glyph), Some("♂"));
        assert_eq!(gender_icon(&Gender::Female).map(|i| i.color), Some(FEMALE_COLOR));
        assert_eq!(gender_icon(&Gender::Genderless).map(|i| i.title), Some("Genderless"));
        assert_eq!(gender_icon(&Gender::Unknown), gender_icon(&Gender::Genderless));
        assert_eq!(gender_icon(&Gender::Other("Fluid".into())), None);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(status_color(&Status::Alive), ALIVE_COLOR);
        assert_eq!(status_color(&Status::Dead), DEAD_COLOR);
        assert_eq!(status_color(&Status::Unknown), OTHER_STATUS_COLOR);
        assert_eq!(status_color(&Status::Other("Zombie".into())), OTHER_STATUS_COLOR);
    }

    #[test]
    fn title_without_icon_has_one_span() {
        let l = title_line("Rick", &Gender::Other("x".into()), Style::default());
        assert_eq!(l.spans.len(), 1);
        let l = title_line("Rick", &Gender::Male, Style::default());
        assert_eq!(l.spans.len(), 3);
    }
}
