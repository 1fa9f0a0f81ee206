//! Track metadata read from PSF-family tag blocks.
//!
//! Reading never fails from the caller's point of view: unreadable or
//! untagged files yield empty metadata with an unknown length.

mod length;
mod model;
mod psf;

use std::path::Path;

use tracing::debug;

pub use model::TrackMetadata;
use psf::read_tags;

/// Read the metadata of the track at `path`.
pub fn read_metadata(path: &Path) -> TrackMetadata {
    match read_tags(path) {
        Ok(tags) => {
            let meta = TrackMetadata::from_tags(path, &tags);
            debug!(
                path = %path.display(),
                length = meta.declared_length,
                "read track metadata"
            );
            meta
        }
        Err(e) => {
            debug!(path = %path.display(), "no usable tags: {e}");
            TrackMetadata::empty(path)
        }
    }
}
