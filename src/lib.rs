//! Arbor - a classic tree command with size, date, and full-path annotations

pub mod error;
pub mod output;
pub mod tree;

pub use error::{ListFailure, WalkError};
pub use output::{LineSink, StreamSink};
pub use tree::{IndentStyle, RenderPolicy, Summary, TreeWalker};
