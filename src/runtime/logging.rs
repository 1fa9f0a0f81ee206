use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{self, LoggingSettings};

/// Send tracing output to the log file; the terminal belongs to the UI.
///
/// `RUST_LOG` overrides the configured level. Returns the log path, or
/// `None` when the file could not be opened and logging stays off.
pub fn init(settings: &LoggingSettings) -> Option<PathBuf> {
    let path = settings.path.clone().unwrap_or_else(config::default_log_path);
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("gsfsel: cannot create log dir {}: {e}", parent.display());
            return None;
        }
    }

    let log_file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("gsfsel: cannot open log file {}: {e}", path.display());
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    if tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .is_err()
    {
        return None;
    }

    eprintln!("gsfsel: logging to {}", path.display());
    Some(path)
}
