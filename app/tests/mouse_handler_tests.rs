use charZoom::app::settings::Settings;
use charZoom::app::{App, Character, Focus, SelectKind};
use charZoom::input::mouse::{MouseButton, MouseEvent, MouseEventKind};
use charZoom::runner::handlers;
use charZoom::ui::layout::{affordance_rect, compute, popup_close_rect};
use ratatui::layout::Rect;

const TERM: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

fn app_with(n: usize) -> App {
    let chars = (0..n)
        .map(|i| {
            Character::new(
                format!("c{}", i),
                "Human",
                "",
                "Male",
                "Alive",
                "",
                format!("2017-11-04T18:{:02}:00.000Z", i),
            )
        })
        .collect();
    App::new(chars, Settings::default())
}

fn click(app: &mut App, col: u16, row: u16) {
    handlers::handle_mouse(app, MouseEvent::left_down(col, row), TERM).unwrap();
}

fn click_status_surface(app: &mut App) {
    let status = compute(TERM, app).filter.select(SelectKind::Status);
    click(app, status.x + 1, status.y + 1);
}

#[test]
fn dropdown_open_select_and_close() {
    let mut app = app_with(3);
    click_status_surface(&mut app);
    assert!(app.filter.status.is_open());
    assert_eq!(app.pointer.listener_count(), 1);

    // second option row inside the list border
    let (kind, list) = compute(TERM, &app).filter.options.unwrap();
    assert_eq!(kind, SelectKind::Status);
    click(&mut app, list.x + 1, list.y + 2);
    assert_eq!(app.filter.status.selected(), Some("Dead"));
    assert!(!app.filter.status.is_open());
    assert_eq!(app.pointer.listener_count(), 0);
}

#[test]
fn surface_click_with_value_does_not_reopen_but_clear_does_clear() {
    let mut app = app_with(3);
    click_status_surface(&mut app);
    let (_, list) = compute(TERM, &app).filter.options.unwrap();
    click(&mut app, list.x + 1, list.y + 1);
    assert_eq!(app.filter.status.selected(), Some("Alive"));

    click_status_surface(&mut app);
    assert!(!app.filter.status.is_open());
    assert_eq!(app.filter.status.selected(), Some("Alive"));

    let status = compute(TERM, &app).filter.select(SelectKind::Status);
    let aff = affordance_rect(status);
    click(&mut app, aff.x + 1, aff.y + 1);
    assert_eq!(app.filter.status.selected(), None);
    assert!(!app.filter.status.is_open());
    assert_eq!(app.pointer.listener_count(), 0);
}

#[test]
fn outside_click_dismisses_without_changing_value() {
    let mut app = app_with(3);
    click_status_surface(&mut app);
    assert!(app.filter.status.is_open());
    // the logo area is outside every control
    click(&mut app, 1, 1);
    assert!(!app.filter.status.is_open());
    assert_eq!(app.filter.status.selected(), None);
    assert_eq!(app.pointer.listener_count(), 0);
}

#[test]
fn any_button_press_outside_dismisses() {
    let mut app = app_with(3);
    for button in [MouseButton::Right, MouseButton::Middle] {
        click_status_surface(&mut app);
        assert!(app.filter.status.is_open());
        let press = MouseEvent {
            column: 1,
            row: 1,
            kind: MouseEventKind::Down(button),
        };
        handlers::handle_mouse(&mut app, press, TERM).unwrap();
        assert!(!app.filter.status.is_open());
        assert_eq!(app.pointer.listener_count(), 0);
    }
}

#[test]
fn right_press_inside_keeps_dropdown_open() {
    let mut app = app_with(3);
    click_status_surface(&mut app);
    let status = compute(TERM, &app).filter.select(SelectKind::Status);
    let press = MouseEvent {
        column: status.x + 1,
        row: status.y + 1,
        kind: MouseEventKind::Down(MouseButton::Right),
    };
    handlers::handle_mouse(&mut app, press, TERM).unwrap();
    assert!(app.filter.status.is_open());
}

#[test]
fn opening_another_dropdown_closes_the_first() {
    let mut app = app_with(3);
    click_status_surface(&mut app);
    let gender = compute(TERM, &app).filter.select(SelectKind::Gender);
    click(&mut app, gender.x + 1, gender.y + 1);
    assert!(!app.filter.status.is_open());
    assert!(app.filter.gender.is_open());
    assert_eq!(app.pointer.listener_count(), 1);
    assert_eq!(app.focus, Focus::Select(SelectKind::Gender));
}

#[test]
fn card_click_opens_popup_and_backdrop_closes_it() {
    let mut app = app_with(4);
    let layout = compute(TERM, &app);
    let (index, card) = layout.cards[2];
    click(&mut app, card.x + 2, card.y + 2);
    assert!(app.grid.popup().visible);
    assert_eq!(
        app.grid.popup().content.as_ref().map(|c| c.name.as_str()),
        Some(format!("c{}", index).as_str())
    );

    click(&mut app, 0, 0);
    assert!(!app.grid.popup().visible);
    assert_eq!(app.grid.popup().content, None);
}

#[test]
fn popup_close_button_closes() {
    let mut app = app_with(2);
    app.grid.click_card(1);
    let popup = compute(TERM, &app).popup.unwrap();
    let close = popup_close_rect(popup);
    // a click inside the body keeps it open
    click(&mut app, popup.x + 2, popup.y + 3);
    assert!(app.grid.popup().visible);
    click(&mut app, close.x + 1, close.y);
    assert!(!app.grid.popup().visible);
}

#[test]
fn hover_tracks_card_under_pointer() {
    let mut app = app_with(3);
    let (_, card) = compute(TERM, &app).cards[1];
    handlers::handle_mouse(&mut app, MouseEvent::moved(card.x + 1, card.y + 1), TERM).unwrap();
    assert_eq!(app.grid.hovered, Some(1));
    handlers::handle_mouse(&mut app, MouseEvent::moved(0, 0), TERM).unwrap();
    assert_eq!(app.grid.hovered, None);
}

#[test]
fn wheel_scrolls_grid() {
    let mut app = app_with(20);
    let grid = compute(TERM, &app).grid;
    let me = MouseEvent {
        column: grid.x + 1,
        row: grid.y + 1,
        kind: MouseEventKind::ScrollDown,
    };
    handlers::handle_mouse(&mut app, me, TERM).unwrap();
    assert_eq!(app.grid.offset_row, 1);
    let first_visible = compute(TERM, &app).cards[0].0;
    assert_eq!(first_visible, 3);
}

#[test]
fn reset_button_clears_form() {
    let mut app = app_with(1);
    click_status_surface(&mut app);
    let (_, list) = compute(TERM, &app).filter.options.unwrap();
    click(&mut app, list.x + 1, list.y + 3);
    app.filter.name.push_str("Rick");
    let reset = compute(TERM, &app).filter.reset;
    click(&mut app, reset.x + 1, reset.y + 1);
    assert!(app.filter.is_default());
    assert_eq!(app.focus, Focus::Reset);
}
