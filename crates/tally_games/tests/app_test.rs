//! Tests for routing terminal events through the surfaces into the game.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tally_games::{App, PageLayout, TallyConfig, banner_text};
use tally_tictactoe::{Phase, Player, Position};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

fn app() -> App {
    App::new(&TallyConfig::default()).expect("Default config is valid")
}

fn press(app: &mut App, c: char) -> bool {
    app.handle_event(
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        AREA,
    )
}

fn press_all(app: &mut App, keys: &str) {
    for c in keys.chars() {
        assert!(press(app, c));
    }
}

fn click(app: &mut App, pos: Position) -> bool {
    let cell = PageLayout::new(AREA).grid().cell(pos);
    app.handle_event(
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: cell.x + 2,
            row: cell.y + 2,
            modifiers: KeyModifiers::NONE,
        }),
        AREA,
    )
}

#[test]
fn test_player_one_wins_top_row_from_keyboard() {
    let mut app = app();
    press_all(&mut app, "14253");

    let state = app.game().state();
    assert_eq!(app.game().phase(), Phase::RoundOver);
    assert_eq!(state.tally().wins(Player::One), 1);
    assert_eq!(state.tally().wins(Player::Two), 0);
    assert_eq!(banner_text(state).as_deref(), Some("XXX Player 1 Wins! XXX"));
}

#[test]
fn test_moves_after_round_over_are_ignored() {
    let mut app = app();
    press_all(&mut app, "14253");
    let before = app.game().state().clone();

    press_all(&mut app, "9");

    assert_eq!(app.game().state(), &before);
}

#[test]
fn test_reset_keys_keep_or_clear_tally() {
    let mut app = app();
    press_all(&mut app, "14253");

    press_all(&mut app, "r");
    assert_eq!(app.game().phase(), Phase::AwaitingMove);
    assert_eq!(app.game().state().tally().wins(Player::One), 1);
    assert_eq!(app.controls().message(), "Board cleared");

    press_all(&mut app, "g");
    assert_eq!(app.game().state().tally().wins(Player::One), 0);
}

#[test]
fn test_symbol_key_restarts_round_with_new_pair() {
    let mut app = app();
    press_all(&mut app, "14253r5");

    press_all(&mut app, "s");

    let state = app.game().state();
    assert!(state.round().history().is_empty());
    assert_eq!(*state.round().current(), Player::One);
    assert_eq!(state.current_symbol().as_char(), 'O');
    assert_eq!(state.players().symbol(Player::Two).as_char(), 'X');
    assert_eq!(state.tally().wins(Player::One), 1);
}

#[test]
fn test_mouse_click_places_symbol() {
    let mut app = app();

    assert!(click(&mut app, Position::BottomLeft));
    assert!(click(&mut app, Position::BottomLeft));

    let state = app.game().state();
    assert_eq!(state.round().history(), &[Position::BottomLeft]);
    assert_eq!(*state.round().current(), Player::Two);
}

#[test]
fn test_quit_key_stops_the_loop() {
    let mut app = app();
    assert!(!press(&mut app, 'q'));
}
