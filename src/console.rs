//! Serialized console output.
//!
//! Workers print from their own threads; without coordination the bytes of
//! two messages interleave mid-line. [`Console`] owns the single shared sink
//! and writes one whole block per lock acquisition. [`BlockWriter`] collects
//! a message locally and releases it as one of those blocks, either on
//! [`BlockWriter::flush`] or when it goes out of scope.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared output sink. One instance per run, handed to every writer through
/// an `Arc`.
pub struct Console {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    /// Console backed by the process stdout.
    pub fn stdout() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    /// Console backed by an arbitrary sink. Tests use this to capture raw
    /// bytes.
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Console {
            sink: Mutex::new(sink),
        }
    }

    /// Writes `block` as one indivisible unit: the sink lock is held for the
    /// whole write, so blocks from different threads never mix their bytes.
    pub fn write_block(&self, block: &str) -> io::Result<()> {
        let mut sink = self.sink.lock().unwrap();
        sink.write_all(block.as_bytes())?;
        sink.flush()
    }
}

/// Accumulates one unit of output and writes it to the console all at once.
///
/// Formatting goes through [`std::fmt::Write`], so `write!`/`writeln!` fill
/// the buffer with no observable side effect. Whatever is still buffered
/// when the writer drops is flushed then, so a message cannot be lost on an
/// early exit.
pub struct BlockWriter {
    console: Arc<Console>,
    buf: String,
}

impl BlockWriter {
    pub fn new(console: Arc<Console>) -> Self {
        BlockWriter {
            console,
            buf: String::new(),
        }
    }

    /// Sends the buffered text to the console and clears the buffer. A no-op
    /// when nothing is buffered.
    pub fn flush(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        // No error path is modeled for console output; a failed write is
        // reported out of band and the buffer is still consumed.
        if let Err(e) = self.console.write_block(&self.buf) {
            log::error!("console write failed: {}", e);
        }
        self.buf.clear();
    }
}

impl fmt::Write for BlockWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl Drop for BlockWriter {
    fn drop(&mut self) {
        self.flush();
    }
}
