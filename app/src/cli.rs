use clap::Parser;
use std::path::PathBuf;

use crate::app::settings::Settings;
use crate::app::types::Character;
use crate::ui::widgets::card::gender_icon;

/// Terminal browser for character datasets.
#[derive(Parser, Debug, Default)]
#[command(name = "charZoom", version, about)]
pub struct Cli {
    /// JSON dataset (array or `{ "results": [...] }` page).
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Settings file to use instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Colour theme: dark or light.
    #[arg(long, value_parser = ["dark", "light"])]
    pub theme: Option<String>,

    /// Disable mouse capture.
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the cards as text and exit.
    #[arg(long)]
    pub dump: bool,

    /// Write the effective settings to the settings file and exit.
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Overlay command-line choices onto loaded settings.
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(d) = &self.data {
            settings.data_file = Some(d.clone());
        }
        if let Some(t) = &self.theme {
            settings.theme = t.clone();
        }
        if self.no_mouse {
            settings.mouse_enabled = false;
        }
        settings
    }
}

/// One text line per card: `name [icon] | Status - Species | gender`.
pub fn dump_line(c: &Character) -> String {
    let icon = gender_icon(&c.gender)
        .map(|i| format!(" {}", i.glyph))
        .unwrap_or_default();
    format!("{}{} | {} - {} | {}", c.name, icon, c.status, c.species, c.gender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let cli = Cli::parse_from(["charZoom", "--no-mouse", "--theme", "light", "--data", "x.json"]);
        let s = cli.apply_to(Settings::default());
        assert!(!s.mouse_enabled);
        assert_eq!(s.theme, "light");
        assert_eq!(s.data_file, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn unknown_theme_rejected() {
        assert!(Cli::try_parse_from(["charZoom", "--theme", "neon"]).is_err());
    }

    #[test]
    fn dump_line_format() {
        let c = Character::new("Summer Smith", "Human", "", "Female", "Alive", "", "");
        assert_eq!(dump_line(&c), "Summer Smith ♀ | Alive - Human | Female");
        let c = Character::new("Blip", "Robot", "", "Fluid", "Dead", "", "");
        assert_eq!(dump_line(&c), "Blip | Dead - Robot | Fluid");
    }
}
