use std::path::{Path, PathBuf};

use super::length::{parse_length, trim_fraction};
use super::psf::PsfTags;

/// Descriptive fields of one track plus its declared length.
///
/// Empty or missing tag values are `None`. `declared_length` is in whole
/// seconds and `0` means the length is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub path: PathBuf,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub game: Option<String>,
    pub year: Option<String>,
    pub copyright: Option<String>,
    /// The `gsfby` credit: who ripped the set.
    pub producer: Option<String>,
    /// The raw `length` tag, kept for display.
    pub length: Option<String>,
    pub declared_length: u64,
}

impl TrackMetadata {
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            ..Self::default()
        }
    }

    pub fn from_tags(path: &Path, tags: &PsfTags) -> Self {
        let field = |name: &str| {
            tags.get(name)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let length = field("length");
        let declared_length = length.as_deref().map(parse_length).unwrap_or(0);

        Self {
            path: path.to_path_buf(),
            title: field("title"),
            artist: field("artist"),
            game: field("game"),
            year: field("year"),
            copyright: field("copyright"),
            producer: field("gsfby"),
            length,
            declared_length,
        }
    }

    /// The length tag without its fractional part, for display.
    pub fn length_display(&self) -> Option<&str> {
        self.length.as_deref().map(trim_fraction)
    }

    /// Title if tagged, else the file stem.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(t) => t.clone(),
            None => self
                .path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}
