//! Error types for the tree walk

use std::io;

use thiserror::Error;

/// Recoverable failure to list one directory's children.
///
/// Rendered inline as a failure marker for that node; the walk continues
/// with siblings and ancestors unaffected.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ListFailure {
    #[from]
    source: io::Error,
}

impl ListFailure {
    /// Short reason text for the rendered failure line.
    pub fn reason(&self) -> String {
        self.source.to_string()
    }
}

/// Fatal, whole-run failure.
///
/// Distinct from [`ListFailure`]: once the root is validated, the only way
/// the walk itself can die is the sink refusing a write.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
