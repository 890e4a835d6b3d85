use ratatui::style::{Color, Style};
use serde::Deserialize;

/// Base palette from which runtime styles are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    /// Card and control background.
    pub surface: Color,
    pub accent: Color,
    /// Placeholder and secondary text.
    pub muted: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    surface: Option<String>,
    muted: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::White,
            surface: Color::Rgb(0x26, 0x37, 0x50),
            accent: Color::Rgb(0x83, 0xbf, 0x46),
            muted: Color::Rgb(0xb3, 0xb3, 0xb3),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            surface: Color::Rgb(0xe8, 0xee, 0xf4),
            accent: Color::Rgb(0x4f, 0x8a, 0x1e),
            muted: Color::Rgb(0x6b, 0x6b, 0x6b),
        }
    }

    /// Built-in theme by name; unknown names fall back to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn style_fg(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Parse a palette file. Missing optional colours come from the dark
    /// theme; a file without `[palette]` is the dark theme.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        if let Some(p) = v.get("palette") {
            let p: Pal = p.clone().try_into()?;
            let base = Self::dark();
            return Ok(Self {
                bg: parse_hex(&p.bg),
                fg: parse_hex(&p.fg),
                accent: parse_hex(&p.accent),
                surface: p.surface.as_deref().map(parse_hex).unwrap_or(base.surface),
                muted: p.muted.as_deref().map(parse_hex).unwrap_or(base.muted),
            });
        }
        Ok(Self::dark())
    }
}

/// `#rrggbb` to an RGB colour; anything else is `Color::Reset`.
pub fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 && s.is_ascii() {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}
