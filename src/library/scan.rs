use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Entry;

/// Normalize a configured extension: trimmed, no leading dot, lowercase.
pub(crate) fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// Case-insensitive exact match of the file's extension against `ext`
/// (already normalized).
pub fn is_playable_name(name: &str, ext: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .map(|e| e.to_ascii_lowercase() == ext)
        .unwrap_or(false)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Sort directories first, then by name.
pub(crate) fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
}

/// List one directory level, keeping subdirectories and playable files.
///
/// An unreadable directory yields an empty listing.
pub fn list_directory(dir: &Path, settings: &LibrarySettings) -> Vec<Entry> {
    let ext = normalize_extension(&settings.extension);
    let mut entries: Vec<Entry> = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links);

    for item in walker {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                // The root itself failing shows up here too.
                warn!(dir = %dir.display(), "listing error: {e}");
                continue;
            }
        };

        let name = item.file_name().to_string_lossy().into_owned();
        if !settings.include_hidden && is_hidden(&name) {
            continue;
        }

        let is_dir = item.file_type().is_dir();
        if is_dir || is_playable_name(&name, &ext) {
            entries.push(if is_dir { Entry::dir(name) } else { Entry::file(name) });
        }
    }

    sort_entries(&mut entries);
    debug!(dir = %dir.display(), count = entries.len(), "listed directory");
    entries
}
