//! Output sink for rendered tree lines
//!
//! The walker emits complete lines through [`LineSink`]; the sink owns
//! termination and buffering. The walker never reads from the sink and never
//! closes it - lifecycle belongs to the caller.

use std::io::{self, Write};

/// Destination for rendered lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Sink over any writer; each line is newline-terminated as written.
pub struct StreamSink<W: Write> {
    inner: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consume the sink and hand back the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LineSink for StreamSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", line)
    }
}

/// Collecting sink for tests: one element per rendered line.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
