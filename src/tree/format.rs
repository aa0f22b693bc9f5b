//! Line construction: indentation, branch glyphs, entry suffixes

use chrono::{DateTime, Local};

use super::config::{IndentStyle, RenderPolicy};
use super::entry::FsEntry;

const BRANCH_MID: &str = "|-- ";
const BRANCH_LAST: &str = "`-- ";

/// Build the indentation prefix for a node: one segment per open ancestor
/// level, then the branch glyph for the node itself.
///
/// `ancestors` holds, innermost-last, whether each open ancestor was the
/// last sibling at its own level; only the `Padded` style consults it.
pub fn indent_prefix(policy: &RenderPolicy, ancestors: &[bool], is_last: bool) -> String {
    if policy.skip_indent {
        return String::new();
    }

    let mut prefix = String::new();
    for &ancestor_was_last in ancestors {
        prefix.push_str(match policy.indent {
            IndentStyle::Flat => "| ",
            IndentStyle::Padded if ancestor_was_last => "    ",
            IndentStyle::Padded => "|   ",
        });
    }
    prefix.push_str(if is_last { BRANCH_LAST } else { BRANCH_MID });
    prefix
}

/// Name as rendered: bare file name, or the full path under `-f`.
pub fn display_name(entry: &FsEntry, policy: &RenderPolicy) -> String {
    if policy.full_path {
        entry.path.display().to_string()
    } else {
        entry.name.clone()
    }
}

type Suffix = fn(&FsEntry, &RenderPolicy) -> Option<String>;

/// Suffix formatters in application order: date, then size. Precedence
/// between the two size forms lives inside `size_suffix`.
const SUFFIXES: &[Suffix] = &[modified_suffix, size_suffix];

/// Concatenated optional suffixes for one file entry.
pub fn entry_suffixes(entry: &FsEntry, policy: &RenderPolicy) -> String {
    SUFFIXES
        .iter()
        .filter_map(|suffix| suffix(entry, policy))
        .collect()
}

fn modified_suffix(entry: &FsEntry, policy: &RenderPolicy) -> Option<String> {
    if !policy.show_modified {
        return None;
    }
    let local: DateTime<Local> = entry.modified?.into();
    Some(format!(" [{}]", local.format("%Y-%m-%d")))
}

/// Size suffix. `show_size` (bare count) wins when both size flags are set.
fn size_suffix(entry: &FsEntry, policy: &RenderPolicy) -> Option<String> {
    if policy.show_size {
        Some(format!(" {}", entry.size))
    } else if policy.show_size_in_bytes {
        Some(format!(" {} bytes", entry.size))
    } else {
        None
    }
}
