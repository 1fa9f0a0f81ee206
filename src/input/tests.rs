use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::bindings::Trigger;
use super::trigger::TriggerEdge;
use super::*;
use crate::session::{Action, Direction, Mode};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn trigger_fires_once_per_crossing() {
    let mut edge = TriggerEdge::new(16_000);
    assert!(!edge.sample(0));
    assert!(!edge.sample(16_000));
    assert!(edge.sample(16_001));
    assert!(!edge.sample(32_000));
    assert!(!edge.sample(20_000));
    assert!(!edge.sample(100));
    assert!(edge.sample(i16::MAX));
}

#[test]
fn trigger_ignores_negative_travel() {
    let mut edge = TriggerEdge::new(16_000);
    assert!(!edge.sample(i16::MIN));
    assert!(!edge.sample(-20_000));
}

#[test]
fn key_pulse_fires_one_tick_only() {
    let mut axes = TriggerAxes::new(16_000);
    assert!(axes.sample().is_empty());

    axes.press(Trigger::R2);
    assert_eq!(axes.sample(), vec![Trigger::R2]);
    assert!(axes.sample().is_empty());

    axes.press(Trigger::L2);
    axes.press(Trigger::R2);
    assert_eq!(axes.sample(), vec![Trigger::L2, Trigger::R2]);
}

#[test]
fn held_trigger_does_not_repeat() {
    let mut axes = TriggerAxes::new(16_000);
    axes.press(Trigger::L2);
    assert_eq!(axes.sample(), vec![Trigger::L2]);
    axes.press(Trigger::L2);
    assert!(axes.sample().is_empty());
    assert!(axes.sample().is_empty());
    axes.press(Trigger::L2);
    assert_eq!(axes.sample(), vec![Trigger::L2]);
}

#[test]
fn browse_bindings() {
    let b = |button| command_for(Mode::Browsing, button);
    assert_eq!(b(Button::Up), Some(Command::Session(Action::MoveSelection(-1))));
    assert_eq!(b(Button::Down), Some(Command::Session(Action::MoveSelection(1))));
    assert_eq!(b(Button::L1), Some(Command::Session(Action::MoveSelection(-10))));
    assert_eq!(b(Button::R1), Some(Command::Session(Action::MoveSelection(10))));
    assert_eq!(
        b(Button::Right),
        Some(Command::Session(Action::SelectAdjacent(Direction::Forward)))
    );
    assert_eq!(b(Button::A), Some(Command::Session(Action::Enter)));
    assert_eq!(b(Button::B), Some(Command::Session(Action::GoUp)));
    assert_eq!(b(Button::Start), None);
    assert_eq!(b(Button::Y), None);
    assert_eq!(b(Button::X), None);
}

#[test]
fn now_playing_bindings() {
    let p = |button| command_for(Mode::NowPlaying, button);
    assert_eq!(p(Button::B), Some(Command::Session(Action::Stop)));
    assert_eq!(
        p(Button::Left),
        Some(Command::Session(Action::Skip(Direction::Backward)))
    );
    assert_eq!(p(Button::Y), Some(Command::Session(Action::CycleLoop)));
    assert_eq!(p(Button::Start), Some(Command::Session(Action::TogglePause)));
    assert_eq!(p(Button::A), None);
    assert_eq!(p(Button::Up), None);
}

#[test]
fn global_bindings_apply_in_every_mode() {
    for mode in [Mode::Browsing, Mode::NowPlaying] {
        assert_eq!(command_for(mode, Button::Select), Some(Command::Quit));
        assert_eq!(command_for(mode, Button::Guide), Some(Command::ToggleDisplay));
    }
    assert_eq!(
        command_for_trigger(Trigger::R2),
        Command::Session(Action::Skip(Direction::Forward))
    );
    assert_eq!(
        command_for_trigger(Trigger::L2),
        Command::Session(Action::Skip(Direction::Backward))
    );
}

#[test]
fn keyboard_layout() {
    assert_eq!(map_key(&press(KeyCode::Enter)), Some(KeyInput::Button(Button::A)));
    assert_eq!(map_key(&press(KeyCode::Esc)), Some(KeyInput::Button(Button::B)));
    assert_eq!(map_key(&press(KeyCode::Char(' '))), Some(KeyInput::Button(Button::Start)));
    assert_eq!(map_key(&press(KeyCode::Char('q'))), Some(KeyInput::Button(Button::Select)));
    assert_eq!(map_key(&press(KeyCode::Char('m'))), Some(KeyInput::Button(Button::Guide)));
    assert_eq!(map_key(&press(KeyCode::PageDown)), Some(KeyInput::Button(Button::R1)));
    assert_eq!(map_key(&press(KeyCode::Char('['))), Some(KeyInput::Trigger(Trigger::L2)));
    assert_eq!(map_key(&press(KeyCode::Char(']'))), Some(KeyInput::Trigger(Trigger::R2)));
    assert_eq!(map_key(&press(KeyCode::Char('z'))), None);
}

#[test]
fn ctrl_c_interrupts_and_releases_are_dropped() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(&ctrl_c), Some(KeyInput::Interrupt));

    let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert_eq!(map_key(&ctrl_q), None);

    let mut release = press(KeyCode::Enter);
    release.kind = KeyEventKind::Release;
    assert_eq!(map_key(&release), None);
}
