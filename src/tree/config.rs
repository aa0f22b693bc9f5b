//! Configuration types for the tree walk

/// Prefix drawing convention for ancestor levels.
///
/// `Flat` draws a continuation bar at every ancestor column regardless of
/// whether that ancestor chain is still open. `Padded` draws `"|   "` while
/// an ancestor has further siblings and blank padding once it was the last
/// sibling at its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    #[default]
    Flat,
    Padded,
}

/// Immutable per-run rendering policy.
#[derive(Debug, Clone)]
pub struct RenderPolicy {
    /// Include hidden (dot-prefixed) entries.
    pub include_hidden: bool,
    /// List only directories; the files sequence is always empty.
    pub dirs_only: bool,
    /// Render subdirectories before files (default is files first).
    pub dirs_first: bool,
    /// Omit directories with no renderable children, recursively.
    pub prune_empty: bool,
    /// Print bare names without indentation or branch glyphs.
    pub skip_indent: bool,
    /// Print absolute paths instead of names.
    pub full_path: bool,
    /// Append the size as a bare byte count. Wins over
    /// `show_size_in_bytes` when both are set.
    pub show_size: bool,
    /// Append the size as `<n> bytes`.
    pub show_size_in_bytes: bool,
    /// Append the last-modified date as `[YYYY-MM-DD]`.
    pub show_modified: bool,
    /// Omit the blank line and summary after the listing.
    pub skip_summary: bool,
    pub indent: IndentStyle,
    /// Render directories at this depth but do not descend past it.
    pub max_depth: Option<usize>,
    /// When non-empty, only files matching at least one glob are listed.
    pub match_patterns: Vec<String>,
    /// Files and directories matching any glob are excluded.
    pub ignore_patterns: Vec<String>,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            include_hidden: false,
            dirs_only: false,
            dirs_first: false,
            prune_empty: false,
            skip_indent: false,
            full_path: false,
            show_size: false,
            show_size_in_bytes: false,
            show_modified: false,
            skip_summary: false,
            indent: IndentStyle::Flat,
            max_depth: None,
            match_patterns: Vec::new(),
            ignore_patterns: Vec::new(),
        }
    }
}
