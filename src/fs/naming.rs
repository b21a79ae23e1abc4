//! Filename generation and manipulation.

use crate::error::{Error, Result};

/// Derive the on-disk file name from an enclosure address.
///
/// Takes the trailing path segment and drops any query string.
pub fn file_name_from_url(url: &str) -> Result<String> {
    let last_segment = url.rsplit('/').next().unwrap_or(url);
    let name = last_segment.split('?').next().unwrap_or(last_segment);

    sanitize_filename(name)
}

/// Characters replaced with `_` in every name.
const RESERVED: &[char] = &[':', '*', '?', '"', '<', '>', '|'];

/// Sanitize an enclosure file name.
///
/// Traversal patterns, path separators and NUL bytes are rejected outright;
/// the name is used both on disk and as a dedup log key. Control characters
/// are replaced, since tabs and newlines would corrupt the log.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    clean(name, "Filename")
}

/// Sanitize a folder name.
///
/// Used for subscription names, where separators are replaced rather than
/// rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    let flattened = name.replace(['/', '\\'], "_");
    clean(&flattened, "Path component")
}

fn clean(name: &str, what: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| {
            if RESERVED.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(format!(
            "{} cannot be empty or whitespace-only",
            what
        )));
    }

    Ok(sanitized)
}
