//! Small enums shared by the session, the UI and the input mapping.

use crate::config::LoopModeSetting;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    NowPlaying,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Stop at the end of the track.
    Off,
    /// Replay the same track.
    RepeatOne,
    /// Advance to the next playable entry, wrapping around.
    #[default]
    RepeatAll,
}

impl LoopMode {
    /// `Off -> RepeatOne -> RepeatAll -> Off`.
    pub fn cycle(self) -> Self {
        match self {
            Self::Off => Self::RepeatOne,
            Self::RepeatOne => Self::RepeatAll,
            Self::RepeatAll => Self::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::RepeatOne => "ONE",
            Self::RepeatAll => "ALL",
        }
    }
}

impl From<LoopModeSetting> for LoopMode {
    fn from(setting: LoopModeSetting) -> Self {
        match setting {
            LoopModeSetting::Off => Self::Off,
            LoopModeSetting::RepeatOne => Self::RepeatOne,
            LoopModeSetting::RepeatAll => Self::RepeatAll,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// A user request, already decoded from buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the browse cursor by a number of rows.
    MoveSelection(isize),
    /// Move the browse cursor to the adjacent playable entry.
    SelectAdjacent(Direction),
    /// Enter the selected directory or play the selected track.
    Enter,
    /// Browse the parent directory.
    GoUp,
    /// Skip to the adjacent track while playing.
    Skip(Direction),
    /// Stop playback and return to browsing.
    Stop,
    TogglePause,
    CycleLoop,
}
