use charZoom::app::settings::Settings;
use charZoom::app::{App, Character, Focus, SelectKind};
use charZoom::input::{KeyCode, KeyEvent, KeyModifiers};
use charZoom::runner::handlers;
use ratatui::layout::Rect;

const TERM: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

fn app() -> App {
    let chars = vec![
        Character::new("Rick", "Human", "", "Male", "Alive", "", "2017-11-04T18:48:46.250Z"),
        Character::new("Morty", "Human", "", "Male", "Alive", "", "2017-11-04T18:50:21.651Z"),
    ];
    App::new(chars, Settings::default())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handlers::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), TERM).unwrap()
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn keyboard_select_flow() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Select(SelectKind::Status));
    press(&mut app, KeyCode::Enter);
    assert!(app.filter.status.is_open());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.filter.status.selected(), Some("Dead"));
    assert!(!app.filter.status.is_open());

    // Enter on a selected dropdown does not reopen it
    press(&mut app, KeyCode::Enter);
    assert!(!app.filter.status.is_open());

    press(&mut app, KeyCode::Delete);
    assert_eq!(app.filter.status.selected(), None);
    assert_eq!(app.pointer.listener_count(), 0);
}

#[test]
fn esc_closes_open_dropdown_keeping_value() {
    let mut app = app();
    app.focus = Focus::Select(SelectKind::Species);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(!app.filter.species.is_open());
    assert_eq!(app.filter.species.selected(), None);
}

#[test]
fn text_inputs_apply_and_reset() {
    let mut app = app();
    app.focus = Focus::Name;
    type_str(&mut app, "Rickq");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.filter.name, "Rick");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Kind);
    type_str(&mut app, "Clone");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Apply);
    press(&mut app, KeyCode::Enter);
    let applied = app.filter.last_applied.clone().unwrap();
    assert_eq!(applied.name, "Rick");
    assert_eq!(applied.kind, "Clone");
    // Apply leaves the collection alone
    assert_eq!(app.grid.len(), 2);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Reset);
    press(&mut app, KeyCode::Enter);
    assert!(app.filter.is_default());
}

#[test]
fn grid_enter_opens_popup_and_esc_closes() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    assert_eq!(app.grid.selected, 1);
    press(&mut app, KeyCode::Enter);
    assert!(app.grid.popup().visible);
    assert_eq!(app.grid.popup().content.as_ref().map(|c| c.name.as_str()), Some("Morty"));
    press(&mut app, KeyCode::Esc);
    assert!(!app.grid.popup().visible);
}

#[test]
fn quit_keys() {
    let mut app = app();
    app.focus = Focus::Name;
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.filter.name, "q");
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(handlers::handle_key(&mut app, ctrl_c, TERM).unwrap());

    app.focus = Focus::Grid;
    assert!(press(&mut app, KeyCode::Char('q')));
}
