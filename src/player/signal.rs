//! Job-control signals for the decoder process.

use std::io;
use std::process::Child;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Signal {
    Stop,
    Continue,
}

#[cfg(unix)]
pub(super) fn send(child: &Child, signal: Signal) -> io::Result<()> {
    let raw = match signal {
        Signal::Stop => libc::SIGSTOP,
        Signal::Continue => libc::SIGCONT,
    };
    let pid = child.id() as libc::pid_t;
    // The child is not yet reaped while we hold it, so the pid is still ours.
    let rc = unsafe { libc::kill(pid, raw) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
pub(super) fn send(_child: &Child, signal: Signal) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("{signal:?} is not supported on this platform"),
    ))
}
