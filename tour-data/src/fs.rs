//! Capability-based file access for table inputs.
//!
//! Paths are UTF-8 (`camino`) and opened through `cap-std` using ambient
//! authority, so callers never touch `std::fs` directly.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a table file for reading.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_table_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Whether `path` exists and is a regular file.
///
/// Returns `Ok(false)` for directories and other non-file entries, and an
/// [`io::ErrorKind::NotFound`] error when nothing exists at `path`.
///
/// # Errors
/// Returns the underlying I/O error when the parent directory cannot be
/// opened or the entry cannot be inspected.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
