//! The browsable directory listing and its ordinal navigation.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LibrarySettings;

use super::model::{Entry, EnterOutcome};
use super::scan::{is_playable_name, list_directory, normalize_extension};

/// Current directory listing plus the selection cursor.
///
/// `selected` stays within `0..entries.len()` while the listing is non-empty
/// and is `0` otherwise. `scroll_offset` is derived state refreshed by
/// [`Catalog::update_scroll`] before each draw.
pub struct Catalog {
    settings: LibrarySettings,
    ext: String,
    root: PathBuf,
    current_dir: PathBuf,
    entries: Vec<Entry>,
    selected: usize,
    scroll_offset: usize,
}

impl Catalog {
    /// Build a catalog rooted at `settings.root` and list it.
    pub fn open(settings: &LibrarySettings) -> Self {
        let mut catalog = Self::empty(settings);
        catalog.reload();
        info!(
            root = %catalog.root.display(),
            entries = catalog.entries.len(),
            "catalog opened"
        );
        catalog
    }

    fn empty(settings: &LibrarySettings) -> Self {
        Self {
            settings: settings.clone(),
            ext: normalize_extension(&settings.extension),
            root: settings.root.clone(),
            current_dir: settings.root.clone(),
            entries: Vec::new(),
            selected: 0,
            scroll_offset: 0,
        }
    }

    /// Build a catalog over a fixed listing without touching the filesystem.
    #[cfg(test)]
    pub(crate) fn with_entries(settings: &LibrarySettings, mut entries: Vec<Entry>) -> Self {
        super::scan::sort_entries(&mut entries);
        let mut catalog = Self::empty(settings);
        catalog.entries = entries;
        catalog
    }

    /// Re-list `path`, replacing the listing and resetting the selection.
    pub fn load(&mut self, path: &Path) {
        self.current_dir = path.to_path_buf();
        self.reload();
    }

    fn reload(&mut self) {
        self.entries = list_directory(&self.current_dir, &self.settings);
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Move the cursor to `idx`, clamped to the listing.
    pub fn select(&mut self, idx: usize) {
        self.selected = idx.min(self.entries.len().saturating_sub(1));
    }

    /// Move the cursor by `delta` rows, clamped to `[0, len - 1]`.
    pub fn move_selection(&mut self, delta: isize) {
        if self.entries.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.entries.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn is_playable(&self, idx: usize) -> bool {
        self.entries
            .get(idx)
            .map(|e| !e.is_dir && is_playable_name(&e.name, &self.ext))
            .unwrap_or(false)
    }

    pub fn path_of(&self, idx: usize) -> Option<PathBuf> {
        self.entries.get(idx).map(|e| self.current_dir.join(&e.name))
    }

    /// Scan circularly from `from` for the next playable file in the given
    /// direction. Returns `from` unchanged when nothing else qualifies.
    pub fn find_adjacent_playable(&self, from: usize, forward: bool) -> usize {
        let size = self.entries.len();
        if size == 0 {
            return from;
        }

        let mut idx = from % size;
        for _ in 0..size {
            idx = if forward {
                (idx + 1) % size
            } else {
                (idx + size - 1) % size
            };
            if self.is_playable(idx) {
                return idx;
            }
        }
        from
    }

    /// Activate row `idx`: descend into directories, report files to play.
    pub fn enter(&mut self, idx: usize) -> EnterOutcome {
        let Some(entry) = self.entries.get(idx) else {
            return EnterOutcome::Nothing;
        };

        if entry.is_dir {
            let next = self.current_dir.join(&entry.name);
            debug!(dir = %next.display(), "entering directory");
            self.load(&next);
            EnterOutcome::Entered
        } else if self.is_playable(idx) {
            self.path_of(idx)
                .map(EnterOutcome::Play)
                .unwrap_or(EnterOutcome::Nothing)
        } else {
            EnterOutcome::Nothing
        }
    }

    /// Go to the parent directory unless already at the root.
    ///
    /// Returns whether the listing changed.
    pub fn go_up(&mut self) -> bool {
        if self.current_dir == self.root {
            return false;
        }
        let parent = match self.current_dir.parent() {
            Some(p) if p.starts_with(&self.root) => p.to_path_buf(),
            _ => self.root.clone(),
        };
        debug!(dir = %parent.display(), "leaving directory");
        self.load(&parent);
        true
    }

    /// Recompute the scroll offset for a list with `rows` visible lines.
    pub fn update_scroll(&mut self, rows: usize) -> usize {
        self.scroll_offset = scroll_offset_for(self.selected, self.entries.len(), rows);
        self.scroll_offset
    }
}

/// Keep the selection centered once it is past the first half-window,
/// pinning the window to the end of the list near the bottom.
pub fn scroll_offset_for(selected: usize, total: usize, rows: usize) -> usize {
    let rows = rows.max(1);
    let half = rows / 2;
    if selected <= half {
        0
    } else if selected + half >= total {
        total.saturating_sub(rows)
    } else {
        selected - half
    }
}
