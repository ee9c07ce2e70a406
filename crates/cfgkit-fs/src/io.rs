//! Scoped file primitives
//!
//! Every function opens its handle, uses it and drops it before returning,
//! on success and error paths alike. No locking is performed: concurrent
//! writers to the same file may interleave.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
///
/// A missing file is reported as [`Error::NotFound`].
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::not_found(path),
        _ => Error::io(path, e),
    })
}

/// Replace the content of `path` with `content`.
///
/// Opens with create+truncate, writes everything and closes. This is not an
/// atomic replace; a crash mid-write can leave a truncated file.
pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.write_all(content)
        .map_err(|e| Error::io(path, e))?;
    file.flush().map_err(|e| Error::io(path, e))
}

/// Replace the content of `path` with UTF-8 text.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_bytes(path, content.as_bytes())
}

/// Create an empty file at `path`.
///
/// Returns `Ok(false)` without touching anything if the file already exists.
pub fn create_new(path: &Path) -> Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}
