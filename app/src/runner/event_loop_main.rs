use anyhow::Context;
use ratatui::layout::Rect;
use std::time::Duration;

use crate::app::types::Character;
use crate::app::{settings::Settings, App};
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, set_mouse_capture, Tui};
use crate::ui;

/// Run the interactive browser until the user quits. The terminal is
/// restored even when the loop fails.
pub fn run_app(characters: Vec<Character>, settings: Settings) -> anyhow::Result<()> {
    let mut terminal = init_terminal(settings.mouse_enabled).context("terminal setup failed")?;
    let mut app = App::new(characters, settings);
    tracing::info!(cards = app.grid.len(), "browser started");

    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(terminal).context("terminal restore failed")?;
    tracing::info!("browser stopped");
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    // Track current mouse capture state so it follows the setting.
    let mut mouse_capture_enabled = app.settings.mouse_enabled;

    while !app.should_quit {
        ui::draw_frame(terminal, app)?;

        if !poll(Duration::from_millis(100))? {
            continue;
        }
        let size = terminal.size()?;
        let term_rect = Rect::new(0, 0, size.width, size.height);
        match read_event()? {
            InputEvent::Key(key) => {
                if handlers::handle_key(app, key, term_rect)? {
                    app.should_quit = true;
                }
            }
            InputEvent::Mouse(me) => {
                if app.settings.mouse_enabled {
                    handlers::handle_mouse(app, me, term_rect)?;
                }
            }
            InputEvent::Resize(_, _) => { /* redraw on next loop */ }
            InputEvent::Other => {}
        }

        if app.settings.mouse_enabled != mouse_capture_enabled {
            mouse_capture_enabled = app.settings.mouse_enabled;
            set_mouse_capture(terminal, mouse_capture_enabled)?;
        }
    }
    Ok(())
}
