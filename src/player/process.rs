use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::{debug, info, warn};

use crate::config::DecoderSettings;

use super::controller::{Player, PlayerError, PollStatus};
use super::signal::{self, Signal};

/// Runs the external decoder as a child process.
///
/// The child is held until its exit has been observed by `poll_exit`, so a
/// killed decoder is always reaped and never left as a zombie.
pub struct DecoderProcess {
    program: PathBuf,
    args: Vec<String>,
    child: Option<Child>,
    paused: bool,
    killed: bool,
}

impl DecoderProcess {
    pub fn new(settings: &DecoderSettings) -> Self {
        Self {
            program: settings.program.clone(),
            args: settings.args.clone(),
            child: None,
            paused: false,
            killed: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    fn clear(&mut self) {
        self.child = None;
        self.paused = false;
        self.killed = false;
    }

    /// A failed kill leaves the decoder unmarked so a later terminate retries.
    pub(super) fn record_kill(&mut self, pid: u32, result: io::Result<()>) {
        match result {
            Ok(()) => {
                info!(pid, "decoder killed");
                self.killed = true;
                self.paused = false;
            }
            Err(e) => warn!(pid, "failed to kill decoder: {e}"),
        }
    }

    fn signal(&mut self, sig: Signal) -> bool {
        let Some(child) = self.child.as_ref() else {
            return false;
        };
        match signal::send(child, sig) {
            Ok(()) => {
                debug!(pid = child.id(), ?sig, "signalled decoder");
                true
            }
            Err(e) => {
                warn!(pid = child.id(), ?sig, "failed to signal decoder: {e}");
                false
            }
        }
    }
}

impl Player for DecoderProcess {
    fn launch(&mut self, track: &Path) -> Result<(), PlayerError> {
        if self.child.is_some() {
            warn!(track = %track.display(), "launch rejected: decoder still live");
            return Err(PlayerError::AlreadyRunning);
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(track)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(PlayerError::Spawn)?;

        info!(pid = child.id(), track = %track.display(), "decoder launched");
        self.child = Some(child);
        self.paused = false;
        self.killed = false;
        Ok(())
    }

    fn poll_exit(&mut self) -> PollStatus {
        let Some(child) = self.child.as_mut() else {
            return PollStatus::Idle;
        };

        match child.try_wait() {
            Ok(Some(status)) => {
                debug!(pid = child.id(), %status, "decoder exited");
                self.clear();
                PollStatus::Exited
            }
            Ok(None) => PollStatus::Running,
            Err(e) => {
                // The child can no longer be waited on; treat it as gone.
                warn!(pid = child.id(), "waiting on decoder failed: {e}");
                self.clear();
                PollStatus::Exited
            }
        }
    }

    fn pause(&mut self) {
        if self.paused || self.killed {
            return;
        }
        if self.signal(Signal::Stop) {
            self.paused = true;
        }
    }

    fn resume(&mut self) {
        if !self.paused {
            return;
        }
        if self.signal(Signal::Continue) {
            self.paused = false;
        }
    }

    fn terminate(&mut self) {
        if self.killed {
            return;
        }
        let Some(child) = self.child.as_mut() else {
            return;
        };
        let pid = child.id();
        let result = child.kill();
        self.record_kill(pid, result);
    }

    fn reap(&mut self) {
        if !self.killed {
            return;
        }
        let Some(child) = self.child.as_mut() else {
            return;
        };
        match child.wait() {
            Ok(status) => debug!(pid = child.id(), %status, "decoder reaped"),
            Err(e) => warn!(pid = child.id(), "waiting on killed decoder failed: {e}"),
        }
        self.clear();
    }

    fn is_live(&self) -> bool {
        self.child.is_some()
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Drop for DecoderProcess {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
