use std::fs;
use std::path::Path;

use thiserror::Error;

/// Largest tag block the reader will look at; anything past it is ignored.
pub const MAX_TAG_BYTES: usize = 50_000;

const HEADER_LEN: usize = 16;
const TAG_MARKER: &[u8] = b"[TAG]";

#[derive(Debug, Error)]
pub enum TagError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a PSF file")]
    NotPsf,
    #[error("header declares {declared} bytes but file has {actual}")]
    Truncated { declared: usize, actual: usize },
    #[error("no [TAG] block")]
    MissingTag,
}

/// Parsed `name=value` pairs of a PSF tag block, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PsfTags {
    vars: Vec<(String, String)>,
}

impl PsfTags {
    /// Look up a variable by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn push(&mut self, name: &str, value: &str) {
        match self
            .vars
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            // Repeated names are multi-line values.
            Some((_, existing)) => {
                existing.push('\n');
                existing.push_str(value);
            }
            None => self.vars.push((name.to_string(), value.to_string())),
        }
    }
}

fn read_u32_le(bytes: &[u8], at: usize) -> usize {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[at..at + 4]);
    u32::from_le_bytes(word) as usize
}

/// Parse the tag block of an in-memory PSF image.
pub fn parse_tags(bytes: &[u8]) -> Result<PsfTags, TagError> {
    if bytes.len() < HEADER_LEN || &bytes[..3] != b"PSF" {
        return Err(TagError::NotPsf);
    }

    let reserved = read_u32_le(bytes, 4);
    let program = read_u32_le(bytes, 8);
    let tag_start = HEADER_LEN
        .checked_add(reserved)
        .and_then(|n| n.checked_add(program))
        .ok_or(TagError::Truncated {
            declared: usize::MAX,
            actual: bytes.len(),
        })?;

    if tag_start > bytes.len() {
        return Err(TagError::Truncated {
            declared: tag_start,
            actual: bytes.len(),
        });
    }

    let rest = &bytes[tag_start..];
    if !rest.starts_with(TAG_MARKER) {
        return Err(TagError::MissingTag);
    }

    let body = &rest[TAG_MARKER.len()..];
    let body = &body[..body.len().min(MAX_TAG_BYTES)];
    let text = String::from_utf8_lossy(body);

    let mut tags = PsfTags::default();
    for line in text.lines() {
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        tags.push(name, value.trim());
    }
    Ok(tags)
}

/// Read and parse the tag block of the PSF file at `path`.
pub fn read_tags(path: &Path) -> Result<PsfTags, TagError> {
    let bytes = fs::read(path)?;
    parse_tags(&bytes)
}
