//! Entry classification and ordering
//!
//! One directory in, two ordered sequences out: subdirectories and files,
//! filtered by the active policy. The walker renders from these sequences;
//! nothing here writes output or recurses.

use std::fs;
use std::path::Path;

use glob::Pattern;

use crate::error::ListFailure;

use super::config::RenderPolicy;
use super::entry::FsEntry;

/// Filtered, sorted children of one directory.
#[derive(Debug, Default)]
pub struct Classified {
    pub dirs: Vec<FsEntry>,
    pub files: Vec<FsEntry>,
}

impl Classified {
    /// Number of renderable children.
    pub fn len(&self) -> usize {
        self.dirs.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

/// List, filter, and sort one directory's children.
///
/// Both sequences are ordered by byte order of the file name (`OsString`
/// ordering); names are unique within a directory so the order is total.
/// Pure with respect to the walk: same directory contents and policy give
/// the same result, but contents may change between calls.
///
/// An unlistable directory (permission denied, removed mid-walk) returns a
/// [`ListFailure`] for the caller to render; it never aborts the walk.
pub fn classify(dir: &Path, policy: &RenderPolicy) -> Result<Classified, ListFailure> {
    let read = fs::read_dir(dir).map_err(ListFailure::from)?;

    let mut entries: Vec<_> = read.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    let mut classified = Classified::default();

    for raw in entries {
        // Vanished between listing and stat: treat as never seen.
        let Some(entry) = FsEntry::snapshot(&raw) else {
            continue;
        };

        if !policy.include_hidden && is_hidden(&entry.name) {
            continue;
        }
        if matches_any(&policy.ignore_patterns, &entry.name) {
            continue;
        }

        if entry.is_dir {
            // Never follow directory symlinks; this is the cycle guard.
            if entry.is_symlink {
                continue;
            }
            classified.dirs.push(entry);
        } else {
            if policy.dirs_only {
                continue;
            }
            if !policy.match_patterns.is_empty()
                && !matches_any(&policy.match_patterns, &entry.name)
            {
                continue;
            }
            classified.files.push(entry);
        }
    }

    Ok(classified)
}

/// Hidden per the Unix dot-file convention.
fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check a name against a pattern list: literal equality or glob match.
fn matches_any(patterns: &[String], name: &str) -> bool {
    patterns
        .iter()
        .any(|p| p == name || glob_match(p, name))
}

fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
