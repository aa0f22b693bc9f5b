//! Snapshot of a single directory entry

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// Read-only snapshot of one file-system entry, taken at classification
/// time. Contents may change on disk between snapshot and render; no
/// isolation is provided or required.
#[derive(Debug, Clone)]
pub struct FsEntry {
    /// File name, lossily converted to UTF-8.
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_symlink: bool,
    /// Size in bytes of the entry (target size for file symlinks).
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FsEntry {
    /// Snapshot a raw `DirEntry`.
    ///
    /// Symlinks are resolved one level so that a link to a file carries the
    /// target's size and mtime; a broken link falls back to the link's own
    /// metadata and reads as a zero-length file.
    pub fn snapshot(entry: &fs::DirEntry) -> Option<Self> {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let link_meta = entry.metadata().ok()?;
        let is_symlink = link_meta.is_symlink();
        let meta = if is_symlink {
            fs::metadata(&path).unwrap_or(link_meta)
        } else {
            link_meta
        };

        Some(Self {
            name,
            path,
            is_dir: meta.is_dir(),
            is_symlink,
            size: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}
