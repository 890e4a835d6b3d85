use ratatui::layout::Rect;

use crate::app::types::Focus;
use crate::app::App;
use crate::input::mouse::{MouseButton, MouseEvent, MouseEventKind};
use crate::ui::layout::{self, contains, Hit};

/// Handle a mouse event against the layout of a `term` sized screen.
///
/// Any button press first notifies outside-click listeners (closing any
/// open dropdown the press is not inside); a left press then activates the
/// target.
pub fn handle_mouse(app: &mut App, me: MouseEvent, term: Rect) -> anyhow::Result<()> {
    let layout = layout::compute(term, app);
    let (col, row) = (me.column, me.row);
    if let MouseEventKind::Down(_) = me.kind {
        app.dispatch_pointer_down(|kind| layout.inside_select(kind, col, row));
    }
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let offset = layout
                .filter
                .options
                .map(|(kind, _)| app.filter.select(kind).offset)
                .unwrap_or(0);
            match layout.hit_test(col, row, offset) {
                Hit::Select(kind, target) => {
                    app.click_select(kind, target);
                }
                Hit::Option(kind, index) => app.choose_option(kind, index),
                Hit::Name => app.focus = Focus::Name,
                Hit::Kind => app.focus = Focus::Kind,
                Hit::Apply => {
                    app.focus = Focus::Apply;
                    app.apply_filter();
                }
                Hit::Reset => {
                    app.focus = Focus::Reset;
                    app.reset_filter();
                }
                Hit::Card(index) => {
                    app.focus = Focus::Grid;
                    app.grid.click_card(index);
                }
                Hit::PopupClose | Hit::PopupBackdrop => app.grid.close_popup(),
                Hit::PopupBody | Hit::Nothing => {}
            }
        }
        MouseEventKind::Moved => {
            app.grid.hovered = match layout.hit_test(col, row, 0) {
                Hit::Card(index) => Some(index),
                _ => None,
            };
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp
            if layout.popup.is_none() && contains(layout.grid, col, row) =>
        {
            let delta = if me.kind == MouseEventKind::ScrollDown { 1 } else { -1 };
            app.grid.scroll(delta, layout.columns, layout.visible_rows);
        }
        _ => {}
    }
    Ok(())
}
