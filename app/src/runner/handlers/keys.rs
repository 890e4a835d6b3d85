use ratatui::layout::Rect;

use crate::app::dropdown::ClickTarget;
use crate::app::settings::keybinds;
use crate::app::types::{Focus, SelectKind};
use crate::app::App;
use crate::input::{is_printable_key, KeyCode, KeyEvent};
use crate::ui::layout::{self, ScreenLayout};

/// Top-level key handler. Returns `Ok(true)` when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent, term: Rect) -> anyhow::Result<bool> {
    if keybinds::is_force_quit(&key) {
        return Ok(true);
    }
    let layout = layout::compute(term, app);
    let code = key.code;

    if app.grid.popup().visible {
        if keybinds::is_esc(&code) || keybinds::is_enter(&code) || keybinds::is_quit(&code) {
            app.grid.close_popup();
        }
        return Ok(false);
    }

    if let Some(kind) = app.filter.open_select() {
        handle_open_select(app, kind, &code, &layout);
        return Ok(false);
    }

    if keybinds::is_tab(&code) {
        app.focus_next();
        return Ok(false);
    }
    if keybinds::is_backtab(&code) {
        app.focus_prev();
        return Ok(false);
    }

    match app.focus {
        Focus::Name | Focus::Kind => {
            if keybinds::is_backspace(&code) {
                app.backspace();
            } else if keybinds::is_enter(&code) {
                app.focus_next();
            } else if keybinds::is_esc(&code) {
                app.focus = Focus::Grid;
            } else if is_printable_key(&key) {
                if let KeyCode::Char(c) = code {
                    app.type_char(c);
                }
            }
            return Ok(false);
        }
        Focus::Select(kind) => {
            if keybinds::is_enter(&code) || keybinds::is_char(&code, ' ') || keybinds::is_down(&code) {
                app.click_select(kind, ClickTarget::Surface);
            } else if keybinds::is_clear(&code) && app.filter.select(kind).selected().is_some() {
                app.click_select(kind, ClickTarget::Affordance);
            }
        }
        Focus::Apply => {
            if keybinds::is_enter(&code) {
                app.apply_filter();
            }
        }
        Focus::Reset => {
            if keybinds::is_enter(&code) {
                app.reset_filter();
            }
        }
        Focus::Grid => handle_grid(app, &code, &layout),
    }

    Ok(keybinds::is_quit(&code))
}

fn handle_open_select(app: &mut App, kind: SelectKind, code: &KeyCode, layout: &ScreenLayout) {
    let list_height = layout
        .filter
        .options
        .map(|(_, r)| r.height.saturating_sub(2) as usize)
        .unwrap_or(0);
    let dd = app.filter.select_mut(kind);
    if keybinds::is_down(code) {
        dd.cursor_next();
        dd.ensure_cursor_visible(list_height);
    } else if keybinds::is_up(code) {
        dd.cursor_prev();
        dd.ensure_cursor_visible(list_height);
    } else if keybinds::is_enter(code) {
        dd.choose_cursor();
    } else if keybinds::is_esc(code) || keybinds::is_quit(code) {
        dd.close();
    } else if keybinds::is_tab(code) {
        app.focus_next();
    } else if keybinds::is_backtab(code) {
        app.focus_prev();
    }
}

fn handle_grid(app: &mut App, code: &KeyCode, layout: &ScreenLayout) {
    let columns = layout.columns.max(1) as isize;
    let page = columns * layout.visible_rows.max(1) as isize;
    if keybinds::is_right(code) {
        app.grid.move_selection(1);
    } else if keybinds::is_left(code) {
        app.grid.move_selection(-1);
    } else if keybinds::is_down(code) {
        app.grid.move_selection(columns);
    } else if keybinds::is_up(code) {
        app.grid.move_selection(-columns);
    } else if keybinds::is_page_down(code) {
        app.grid.move_selection(page);
    } else if keybinds::is_page_up(code) {
        app.grid.move_selection(-page);
    } else if keybinds::is_enter(code) {
        app.grid.activate_selected();
    }
    app.grid
        .ensure_selected_visible(layout.columns, layout.visible_rows);
}
