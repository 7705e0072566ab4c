//! Runtime output streams.

use std::io::{self, Write};

/// Where runtime output goes.
///
/// Defaults to stdout; tests substitute an in-memory writer to capture
/// scenario transcripts.
pub enum OutputStream<'a> {
    Stdout,
    With(Box<dyn Write + 'a>),
}

impl Default for OutputStream<'_> {
    fn default() -> Self {
        Self::Stdout
    }
}

impl OutputStream<'_> {
    pub fn with<'a, W: Write + 'a>(stream: W) -> OutputStream<'a> {
        OutputStream::With(Box::new(stream))
    }
}

impl Write for OutputStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputStream::Stdout => io::stdout().write(buf),
            OutputStream::With(write) => write.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputStream::Stdout => io::stdout().flush(),
            OutputStream::With(write) => write.flush(),
        }
    }
}
