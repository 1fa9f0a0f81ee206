use std::env;
use std::path::PathBuf;

use crate::config;

/// Load settings, falling back to defaults on any failure. Runs before
/// logging is up, so problems go to stderr.
pub fn load_settings() -> config::Settings {
    let mut settings = match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("gsfsel: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("gsfsel: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    };

    if let Some(root) = env::args_os().nth(1) {
        settings.library.root = PathBuf::from(root);
    }
    settings
}
