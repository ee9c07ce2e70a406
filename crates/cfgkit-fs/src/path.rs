//! Upward directory search for named ancestors

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Walk upward from `start` until a directory named `target` is found.
///
/// `start` itself is checked first, then each parent in turn. The name
/// comparison is exact; nothing else about the directory is inspected.
///
/// Relative paths are made absolute against the working directory so the
/// walk can reach the filesystem root. Symlinks are not resolved: the names
/// compared are the ones in the path the caller gave. Windows verbatim
/// prefixes (`\\?\`) are stripped where that is lossless.
///
/// # Errors
///
/// Returns [`Error::NotFound`] carrying `start` when the root is reached
/// without a match.
pub fn find_ancestor(start: impl AsRef<Path>, target: &str) -> Result<PathBuf> {
    let start = start.as_ref();
    let absolute = std::path::absolute(start)
        .map(|path| dunce::simplified(&path).to_path_buf())
        .unwrap_or_else(|_| start.to_path_buf());
    let target = OsStr::new(target);

    let mut current = absolute.as_path();
    loop {
        if current.file_name() == Some(target) {
            tracing::debug!(start = %start.display(), found = %current.display(), "Resolved ancestor");
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    tracing::debug!(start = %start.display(), wanted = ?target, "No matching ancestor before filesystem root");
    Err(Error::not_found(start))
}
