use crate::session::{Action, Direction, Mode};

/// Digital controller buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    X,
    Y,
    Start,
    Select,
    Guide,
    Up,
    Down,
    Left,
    Right,
    L1,
    R1,
}

/// Analog shoulder triggers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Trigger {
    L2,
    R2,
}

/// What a button press asks the runtime to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Session(Action),
    ToggleDisplay,
    Quit,
}

/// Resolve a button in the given mode. `None` means the button is unbound
/// there.
pub fn command_for(mode: Mode, button: Button) -> Option<Command> {
    let action = match (mode, button) {
        (_, Button::Select) => return Some(Command::Quit),
        (_, Button::Guide) => return Some(Command::ToggleDisplay),

        (Mode::Browsing, Button::Up) => Action::MoveSelection(-1),
        (Mode::Browsing, Button::Down) => Action::MoveSelection(1),
        (Mode::Browsing, Button::L1) => Action::MoveSelection(-10),
        (Mode::Browsing, Button::R1) => Action::MoveSelection(10),
        (Mode::Browsing, Button::Left) => Action::SelectAdjacent(Direction::Backward),
        (Mode::Browsing, Button::Right) => Action::SelectAdjacent(Direction::Forward),
        (Mode::Browsing, Button::A) => Action::Enter,
        (Mode::Browsing, Button::B) => Action::GoUp,

        (Mode::NowPlaying, Button::B) => Action::Stop,
        (Mode::NowPlaying, Button::Left) => Action::Skip(Direction::Backward),
        (Mode::NowPlaying, Button::Right) => Action::Skip(Direction::Forward),
        (Mode::NowPlaying, Button::Y) => Action::CycleLoop,
        (Mode::NowPlaying, Button::Start) => Action::TogglePause,

        _ => return None,
    };
    Some(Command::Session(action))
}

/// Triggers skip tracks; the session ignores them outside playback.
pub fn command_for_trigger(trigger: Trigger) -> Command {
    let dir = match trigger {
        Trigger::L2 => Direction::Backward,
        Trigger::R2 => Direction::Forward,
    };
    Command::Session(Action::Skip(dir))
}
