//! TreeWalker - depth-first rendering of a directory hierarchy
//!
//! Two passes per node: classify the children first, decide whether the node
//! is emitted at all (pruning, failure markers), then render. Last-sibling
//! flags are computed from position in the combined post-filter child order,
//! never from raw file-system order.

use std::path::Path;

use crate::error::WalkError;
use crate::output::LineSink;

use super::classify::{Classified, classify};
use super::config::RenderPolicy;
use super::entry::FsEntry;
use super::format::{display_name, entry_suffixes, indent_prefix};

/// Final counters for one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Directories rendered, the root included.
    pub dir_count: usize,
    pub file_count: usize,
}

/// One walker instance per run; counters and traversal state are owned here,
/// so independent walkers never interfere.
pub struct TreeWalker<'a> {
    policy: &'a RenderPolicy,
    /// Lastness flag per open ancestor level, innermost last. Length is
    /// always `depth - 1` for the node currently being rendered.
    ancestors: Vec<bool>,
    dir_count: usize,
    file_count: usize,
}

impl<'a> TreeWalker<'a> {
    pub fn new(policy: &'a RenderPolicy) -> Self {
        Self {
            policy,
            ancestors: Vec::new(),
            dir_count: 0,
            file_count: 0,
        }
    }

    /// Render the tree rooted at `root` into `sink`.
    ///
    /// The root must already be validated as an existing directory by the
    /// caller. Per-node listing failures are rendered inline and never abort
    /// the walk; only sink write errors do.
    pub fn walk<S: LineSink>(&mut self, root: &Path, sink: &mut S) -> Result<Summary, WalkError> {
        self.ancestors.clear();
        self.dir_count = 0;
        self.file_count = 0;

        let name = self.root_display(root);
        match classify(root, self.policy) {
            Err(failure) => {
                sink.write_line(&format!("{} - failed: {}", name, failure.reason()))?;
                self.dir_count += 1;
            }
            Ok(children) => {
                sink.write_line(&name)?;
                self.dir_count += 1;
                self.render_children(children, 1, sink)?;
            }
        }

        if !self.policy.skip_summary {
            sink.write_line("")?;
            sink.write_line(&self.summary_line())?;
        }

        Ok(Summary {
            dir_count: self.dir_count,
            file_count: self.file_count,
        })
    }

    /// Render one directory's already-classified children at `depth`.
    fn render_children<S: LineSink>(
        &mut self,
        children: Classified,
        depth: usize,
        sink: &mut S,
    ) -> Result<(), WalkError> {
        let ordered = self.render_order(children);
        let total = ordered.len();

        for (i, entry) in ordered.into_iter().enumerate() {
            let is_last = i + 1 == total;
            if entry.is_dir {
                self.render_dir(&entry, depth, is_last, sink)?;
            } else {
                let line = format!(
                    "{}{}{}",
                    indent_prefix(self.policy, &self.ancestors, is_last),
                    display_name(&entry, self.policy),
                    entry_suffixes(&entry, self.policy),
                );
                sink.write_line(&line)?;
                self.file_count += 1;
            }
        }
        Ok(())
    }

    /// Combined child order for one directory: files before subdirectories
    /// by default, reversed under `dirs_first`. Pruned directories are
    /// dropped here, before lastness is assigned.
    fn render_order(&self, children: Classified) -> Vec<FsEntry> {
        let Classified { mut dirs, files } = children;
        if self.policy.prune_empty {
            dirs.retain(|d| dir_is_renderable(&d.path, self.policy));
        }

        let mut ordered = Vec::with_capacity(dirs.len() + files.len());
        if self.policy.dirs_first {
            ordered.extend(dirs);
            ordered.extend(files);
        } else {
            ordered.extend(files);
            ordered.extend(dirs);
        }
        ordered
    }

    /// Render a subdirectory entry and recurse into it.
    fn render_dir<S: LineSink>(
        &mut self,
        entry: &FsEntry,
        depth: usize,
        is_last: bool,
        sink: &mut S,
    ) -> Result<(), WalkError> {
        let prefix = indent_prefix(self.policy, &self.ancestors, is_last);
        let name = display_name(entry, self.policy);

        // At the depth cutoff the directory is shown but not entered.
        if self.policy.max_depth.is_some_and(|max| depth >= max) {
            sink.write_line(&format!("{}{}", prefix, name))?;
            self.dir_count += 1;
            return Ok(());
        }

        match classify(&entry.path, self.policy) {
            Err(failure) => {
                // The failure marker replaces the directory's own line; the
                // node is still counted but never descended into.
                sink.write_line(&format!("{}{} - failed: {}", prefix, name, failure.reason()))?;
                self.dir_count += 1;
            }
            Ok(children) => {
                sink.write_line(&format!("{}{}", prefix, name))?;
                self.dir_count += 1;
                self.ancestors.push(is_last);
                self.render_children(children, depth + 1, sink)?;
                self.ancestors.pop();
            }
        }
        Ok(())
    }

    fn root_display(&self, root: &Path) -> String {
        if self.policy.full_path {
            root.display().to_string()
        } else {
            root.file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| root.display().to_string())
        }
    }

    fn summary_line(&self) -> String {
        let mut line = format!(
            " {} director{}",
            self.dir_count,
            if self.dir_count == 1 { "y" } else { "ies" }
        );
        if !self.policy.dirs_only {
            line.push_str(&format!(
                ", {} file{}",
                self.file_count,
                if self.file_count == 1 { "" } else { "s" }
            ));
        }
        line
    }
}

/// Whether a directory would contribute at least one rendered line.
///
/// Recursive: a directory whose subdirectories are all themselves empty is
/// not renderable. A directory whose listing fails is renderable - the
/// failure marker is a line. Terminates because the classifier never follows
/// directory symlinks.
fn dir_is_renderable(path: &Path, policy: &RenderPolicy) -> bool {
    match classify(path, policy) {
        Err(_) => true,
        Ok(children) => {
            !children.files.is_empty()
                || children
                    .dirs
                    .iter()
                    .any(|d| dir_is_renderable(&d.path, policy))
        }
    }
}
