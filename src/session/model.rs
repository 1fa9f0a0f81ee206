//! The playback session: what happens next, decided once per tick.
//!
//! Each tick first looks for a decoder exit and acts on it, and only if that
//! did not happen checks the declared-length deadline. Input is applied after
//! the tick. Stop reaps the killed decoder on the spot, so a play request
//! later in the same tick finds the handle free. A manual skip is split
//! across ticks: the request records the direction and kills the decoder,
//! and the advance happens when the exit is observed.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::library::{Catalog, EnterOutcome};
use crate::metadata::{TrackMetadata, read_metadata};
use crate::player::{Player, PlayerError, PollStatus};

use super::timer::PlaybackTimer;
use super::types::{Action, Direction, LoopMode, Mode};

pub struct Session<P: Player> {
    catalog: Catalog,
    player: P,
    mode: Mode,
    loop_mode: LoopMode,
    /// Direction of a skip waiting for the current decoder to exit.
    pending_advance: Option<Direction>,
    track: TrackMetadata,
    timer: PlaybackTimer,
    elapsed_seconds: u64,
    grace_seconds: u64,
}

impl<P: Player> Session<P> {
    pub fn new(catalog: Catalog, player: P, loop_mode: LoopMode, grace_seconds: u64) -> Self {
        Self {
            catalog,
            player,
            mode: Mode::Browsing,
            loop_mode,
            pending_advance: None,
            track: TrackMetadata::default(),
            timer: PlaybackTimer::default(),
            elapsed_seconds: 0,
            grace_seconds,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn track(&self) -> &TrackMetadata {
        &self.track
    }

    #[cfg(test)]
    pub(crate) fn track_duration_seconds(&self) -> u64 {
        self.track.declared_length
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_paused(&self) -> bool {
        self.player.is_paused()
    }

    pub fn manual_advance_pending(&self) -> Option<Direction> {
        self.pending_advance
    }

    /// Advance the state machine by one tick.
    pub fn tick(&mut self, now: Instant) {
        if self.player.is_live()
            && !self.player.is_paused()
            && self.player.poll_exit() == PollStatus::Exited
        {
            self.on_exit(now);
            return;
        }
        self.enforce_deadline(now);
    }

    /// Apply a decoded user request. Requests that make no sense in the
    /// current mode are dropped.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match (self.mode, action) {
            (Mode::Browsing, Action::MoveSelection(delta)) => self.catalog.move_selection(delta),
            (Mode::Browsing, Action::SelectAdjacent(dir)) => {
                let idx = self
                    .catalog
                    .find_adjacent_playable(self.catalog.selected(), dir.is_forward());
                self.catalog.select(idx);
            }
            (Mode::Browsing, Action::Enter) => self.enter_selected(now),
            (Mode::Browsing, Action::GoUp) => {
                self.catalog.go_up();
            }
            (Mode::NowPlaying, Action::Skip(dir)) => self.request_advance(dir),
            (Mode::NowPlaying, Action::Stop) => self.stop(),
            (Mode::NowPlaying, Action::TogglePause) => self.toggle_pause(now),
            (_, Action::CycleLoop) => self.cycle_loop_mode(),
            (mode, action) => debug!(?mode, ?action, "action ignored in this mode"),
        }
    }

    /// Play the selected row if it is a track, or descend if it is a directory.
    pub fn enter_selected(&mut self, now: Instant) {
        if self.mode != Mode::Browsing {
            return;
        }
        let idx = self.catalog.selected();
        if let EnterOutcome::Play(path) = self.catalog.enter(idx) {
            match self.start_track(&path, now) {
                Ok(()) => self.mode = Mode::NowPlaying,
                Err(e) => warn!(track = %path.display(), "could not start track: {e}"),
            }
        }
    }

    /// Ask for the adjacent track. Resolved when the current decoder exit is
    /// observed; a later request before that only replaces the direction.
    pub fn request_advance(&mut self, dir: Direction) {
        if self.mode != Mode::NowPlaying || !self.player.is_live() {
            debug!(?dir, "skip ignored: no live decoder");
            return;
        }
        info!(?dir, "manual advance requested");
        self.pending_advance = Some(dir);
        self.player.terminate();
    }

    /// Stop playback and go back to the listing. The decoder is reaped
    /// before returning, so a play request right after it can launch.
    pub fn stop(&mut self) {
        if self.mode != Mode::NowPlaying {
            return;
        }
        info!("playback stopped");
        self.player.terminate();
        self.player.reap();
        self.pending_advance = None;
        self.mode = Mode::Browsing;
    }

    /// Freeze or continue the decoder; elapsed time only accrues while running.
    pub fn toggle_pause(&mut self, now: Instant) {
        if self.mode != Mode::NowPlaying || !self.player.is_live() {
            return;
        }
        if self.player.is_paused() {
            self.player.resume();
            if !self.player.is_paused() {
                self.timer.resume(now);
                info!(elapsed = self.elapsed_seconds, "resumed");
            }
        } else {
            self.player.pause();
            if self.player.is_paused() {
                self.timer.pause(now);
                self.elapsed_seconds = self.timer.elapsed(now).as_secs();
                info!(elapsed = self.elapsed_seconds, "paused");
            }
        }
    }

    /// Takes effect at the next end-of-track decision.
    pub fn cycle_loop_mode(&mut self) {
        self.loop_mode = self.loop_mode.cycle();
        info!(loop_mode = ?self.loop_mode, "loop mode changed");
    }

    /// Kill the decoder before exiting.
    pub fn shutdown(&mut self) {
        self.pending_advance = None;
        self.player.terminate();
        self.player.reap();
    }

    fn on_exit(&mut self, now: Instant) {
        if self.mode != Mode::NowPlaying {
            debug!("decoder exit reaped while browsing");
            self.pending_advance = None;
            return;
        }

        let current = self.catalog.selected();
        let next = match self.pending_advance.take() {
            Some(dir) => Some(self.catalog.find_adjacent_playable(current, dir.is_forward())),
            None => match self.loop_mode {
                LoopMode::Off => None,
                LoopMode::RepeatOne => Some(current),
                LoopMode::RepeatAll => Some(self.catalog.find_adjacent_playable(current, true)),
            },
        };

        let Some(path) = next.and_then(|idx| self.playable_path(idx)) else {
            info!(loop_mode = ?self.loop_mode, "playback finished");
            self.mode = Mode::Browsing;
            return;
        };

        if let Err(e) = self.start_track(&path, now) {
            // Stay on the now-playing screen; stop brings the user back.
            warn!(track = %path.display(), "could not start next track: {e}");
        }
    }

    fn enforce_deadline(&mut self, now: Instant) {
        if self.mode != Mode::NowPlaying || !self.player.is_live() || self.player.is_paused() {
            return;
        }

        self.elapsed_seconds = self.timer.elapsed(now).as_secs();
        let Some(deadline) = self.deadline_seconds() else {
            return;
        };
        if self.elapsed_seconds >= deadline {
            info!(
                elapsed = self.elapsed_seconds,
                deadline, "track reached its declared length"
            );
            self.player.terminate();
        }
    }

    /// Declared length, plus the grace period under repeat-all. `None`
    /// when the length is unknown.
    fn deadline_seconds(&self) -> Option<u64> {
        let declared = self.track.declared_length;
        if declared == 0 {
            return None;
        }
        let grace = match self.loop_mode {
            LoopMode::RepeatAll => self.grace_seconds,
            LoopMode::Off | LoopMode::RepeatOne => 0,
        };
        Some(declared.saturating_add(grace))
    }

    /// Select `idx` and return its path if it is a playable entry.
    fn playable_path(&mut self, idx: usize) -> Option<PathBuf> {
        if !self.catalog.is_playable(idx) {
            return None;
        }
        self.catalog.select(idx);
        self.catalog.path_of(idx)
    }

    /// Launch `path`; track info and the timer change only once it runs.
    fn start_track(&mut self, path: &Path, now: Instant) -> Result<(), PlayerError> {
        self.player.launch(path)?;
        self.track = read_metadata(path);
        self.timer.start(now);
        self.elapsed_seconds = 0;
        Ok(())
    }
}
