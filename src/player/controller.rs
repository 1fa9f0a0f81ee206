use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// A decoder is still live; launching another would leak it.
    #[error("a decoder process is already running")]
    AlreadyRunning,
    #[error("failed to spawn decoder: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Result of a non-blocking exit check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PollStatus {
    /// No decoder is live.
    Idle,
    Running,
    /// The decoder exited; reported once, after which the handle is gone.
    Exited,
}

/// Lifecycle control over at most one external decoder process.
///
/// Every call is non-blocking. `terminate` only requests the kill; the exit
/// is still observed through `poll_exit`.
pub trait Player {
    /// Start decoding `track`. Rejected while a decoder is live.
    fn launch(&mut self, track: &Path) -> Result<(), PlayerError>;

    fn poll_exit(&mut self) -> PollStatus;

    /// Freeze the decoder. No-op when idle, already paused or being killed.
    fn pause(&mut self);

    /// Continue a frozen decoder. No-op unless paused.
    fn resume(&mut self);

    /// Forcefully kill the decoder. Safe to call repeatedly or when idle.
    fn terminate(&mut self);

    /// Block until a killed decoder has exited and release its handle.
    /// No-op when idle or when no kill was delivered.
    fn reap(&mut self);

    fn is_live(&self) -> bool;

    fn is_paused(&self) -> bool;
}
