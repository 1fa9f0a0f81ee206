use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/gsf-selector/config.toml` or
/// `~/.config/gsf-selector/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `GSFSEL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub decoder: DecoderSettings,
    pub playback: PlaybackSettings,
    pub input: InputSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Top of the browsable tree. Navigation never goes above it.
    pub root: PathBuf,
    /// The single playable extension (case-insensitive, without dot).
    pub extension: String,
    /// Whether to follow symlinks when listing a directory.
    pub follow_links: bool,
    /// Whether to list hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/roms/music/GBA"),
            extension: "minigsf".to_string(),
            follow_links: true,
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecoderSettings {
    /// External decoder executable.
    pub program: PathBuf,
    /// Arguments passed before the track path.
    pub args: Vec<String>,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            program: PathBuf::from("/usr/bin/playgsf"),
            args: vec!["-c".into(), "-s".into(), "-q".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Loop mode at startup. Changes made at runtime are not persisted.
    pub loop_mode: LoopModeSetting,
    /// Extra seconds granted past the declared length under repeat-all.
    pub grace_seconds: u64,
    /// Control loop period in milliseconds.
    pub tick_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            loop_mode: LoopModeSetting::RepeatAll,
            grace_seconds: 5,
            tick_ms: 16,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopModeSetting {
    #[serde(alias = "no-loop", alias = "no_loop", alias = "none")]
    Off,
    #[serde(
        alias = "repeat_one",
        alias = "repeatone",
        alias = "loop-one",
        alias = "one"
    )]
    RepeatOne,
    #[serde(
        alias = "repeat_all",
        alias = "repeatall",
        alias = "loop-all",
        alias = "all"
    )]
    RepeatAll,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Analog trigger activation threshold on the signed 16-bit axis.
    pub trigger_threshold: i16,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            trigger_threshold: 16000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Command (argv) that powers the panel output off. Empty to skip.
    pub off_command: Vec<String>,
    /// Command (argv) that powers the panel output back on. Empty to skip.
    pub on_command: Vec<String>,
    /// sysfs backlight power file; `1` blanks, `0` restores.
    pub backlight_power_path: Option<PathBuf>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let wlr = |state: &str| {
            vec![
                "wlr-randr".to_string(),
                "--output".to_string(),
                "DSI-1".to_string(),
                format!("--{state}"),
            ]
        };
        Self {
            off_command: wlr("off"),
            on_command: wlr("on"),
            backlight_power_path: Some(PathBuf::from("/sys/class/backlight/backlight/bl_power")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Log file. Defaults to the XDG state directory.
    pub path: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
        }
    }
}
