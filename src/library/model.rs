/// A single listing row: a subdirectory or a playable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Outcome of activating a catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterOutcome {
    /// A subdirectory was entered and the listing reloaded.
    Entered,
    /// A playable file was selected; the caller decides how to play it.
    Play(std::path::PathBuf),
    /// Out-of-range index or a non-playable row.
    Nothing,
}
