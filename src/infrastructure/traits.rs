//! I/O boundary traits for testability
//!
//! The walker only talks to a line source and a text sink, so sessions can be
//! driven from stdin/stdout or from scripted buffers in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented text source.
pub trait TextInput {
    /// Read one line without its line terminator.
    /// Returns `None` at end of input, which is distinct from an empty line.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Text sink.
pub trait TextOutput {
    /// Write `line` followed by a line break.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write a fragment without a line break (inline prompts).
    fn write(&mut self, fragment: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Line source over any buffered reader.
#[derive(Debug)]
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderInput<StdinLock<'static>> {
    /// Locked process stdin.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TextInput for ReaderInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Text sink over any writer.
#[derive(Debug)]
pub struct WriterOutput<W> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterOutput<Stdout> {
    /// Process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextOutput for WriterOutput<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn write(&mut self, fragment: &str) -> io::Result<()> {
        write!(self.writer, "{}", fragment)?;
        // Prompts must be visible before the blocking read that follows.
        self.writer.flush()
    }
}
