use std::time::{Duration, Instant};

/// Wall-clock elapsed time of the current track, excluding paused spans.
#[derive(Debug, Default, Clone)]
pub(crate) struct PlaybackTimer {
    /// Start of the current unpaused span.
    started_at: Option<Instant>,
    /// Time accumulated by earlier spans.
    accumulated: Duration,
}

impl PlaybackTimer {
    pub(crate) fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.accumulated = Duration::ZERO;
    }

    pub(crate) fn pause(&mut self, now: Instant) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(started);
        }
    }

    pub(crate) fn resume(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub(crate) fn elapsed(&self, now: Instant) -> Duration {
        let running = self
            .started_at
            .map(|s| now.saturating_duration_since(s))
            .unwrap_or_default();
        self.accumulated + running
    }
}
