use anyhow::Context;
use clap::Parser;

use charZoom::app::settings::{self as config, Settings};
use charZoom::cli::{dump_line, Cli};
use charZoom::{data, logging, runner, ui};

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let loaded = match &cli.config {
        Some(path) => config::load_settings_from(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        // Without a config directory there is no default file to read.
        None => match config::load_settings() {
            Err(config::SettingsError::NoConfigDir) => Settings::default(),
            other => other.context("reading settings")?,
        },
    };
    Ok(cli.apply_to(loaded))
}

fn apply_theme(s: &Settings) -> anyhow::Result<()> {
    match &s.theme_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading theme file {}", path.display()))?;
            let theme = ui::Theme::from_toml(&text)
                .with_context(|| format!("parsing theme file {}", path.display()))?;
            ui::colors::set_from_theme(&theme);
        }
        None => ui::colors::set_theme(&s.theme),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    if cli.write_config {
        let path = match &cli.config {
            Some(p) => {
                config::save_settings_to(&settings, p)?;
                p.clone()
            }
            None => config::save_settings(&settings)?,
        };
        println!("wrote {}", path.display());
        return Ok(());
    }

    let source = data::source_for(settings.data_file.as_deref());

    if cli.dump {
        let characters = source.characters().context("loading characters")?;
        for c in &characters {
            println!("{}", dump_line(c));
        }
        return Ok(());
    }

    let _guard = logging::init(&logging::default_log_dir(), &settings.log_level)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "charZoom starting");
    apply_theme(&settings)?;
    let characters = data::load(source.as_ref()).context("loading characters")?;
    runner::run_app(characters, settings)
}
