//! Screen power control for the handheld panel.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::DisplaySettings;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("`{program}` failed: {source}")]
    Command {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with {status}")]
    Status { program: String, status: String },
    #[error("could not write {}: {source}", path.display())]
    Backlight {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Tracks whether the display is blanked and flips it on request.
pub struct DisplayPower {
    settings: DisplaySettings,
    off: bool,
}

impl DisplayPower {
    pub fn new(settings: &DisplaySettings) -> Self {
        Self {
            settings: settings.clone(),
            off: false,
        }
    }

    pub fn is_off(&self) -> bool {
        self.off
    }

    /// Flip the display power. The flag only changes when every configured
    /// step succeeded.
    pub fn toggle(&mut self) -> Result<(), DisplayError> {
        self.set_off(!self.off)
    }

    /// Turn the display back on if it was blanked.
    pub fn restore(&mut self) {
        if self.off {
            if let Err(e) = self.set_off(false) {
                warn!("could not restore display power: {e}");
            }
        }
    }

    fn set_off(&mut self, off: bool) -> Result<(), DisplayError> {
        let command = if off {
            &self.settings.off_command
        } else {
            &self.settings.on_command
        };
        run_command(command)?;
        // An empty path in the config file disables the backlight step.
        let backlight = self.settings.backlight_power_path.as_deref();
        if let Some(path) = backlight.filter(|p| !p.as_os_str().is_empty()) {
            write_backlight(path, off)?;
        }
        self.off = off;
        info!(off, "display power changed");
        Ok(())
    }
}

fn run_command(argv: &[String]) -> Result<(), DisplayError> {
    let Some((program, args)) = argv.split_first() else {
        return Ok(());
    };
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| DisplayError::Command {
            program: program.clone(),
            source,
        })?;
    if !status.success() {
        return Err(DisplayError::Status {
            program: program.clone(),
            status: status.to_string(),
        });
    }
    Ok(())
}

/// sysfs `bl_power`: `1` powers the backlight down, `0` up.
fn write_backlight(path: &Path, off: bool) -> Result<(), DisplayError> {
    let value = if off { "1" } else { "0" };
    fs::write(path, value).map_err(|source| DisplayError::Backlight {
        path: path.to_path_buf(),
        source,
    })
}
