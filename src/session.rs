//! Playback session: catalog position, loop policy and decoder lifecycle
//! combined into one state machine driven by ticks and user actions.

mod model;
mod timer;
mod types;

pub use model::Session;
pub use types::{Action, Direction, LoopMode, Mode};
