//! External decoder process control.
//!
//! The session talks to the decoder only through the [`Player`] trait so
//! the playback state machine can be driven by a fake in tests.

mod controller;
mod process;
mod signal;

pub use controller::{Player, PlayerError, PollStatus};
pub use process::DecoderProcess;
