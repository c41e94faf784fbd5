//! Prompt display backends.
//!
//! A renderer is the single capability the engine needs to show a question:
//! write a piece of text followed by a line break. Implementations can
//! restyle prompts or redirect them to another sink; [`StdoutRenderer`] is
//! the default and writes to the process's standard output.

use std::io::{self, Write};

/// Trait for prompt display backends.
pub trait PromptRenderer {
    /// Writes `text` followed by a line terminator to the output sink.
    ///
    /// # Arguments
    /// * `text` - Prompt text to display
    ///
    /// # Returns
    /// * `io::Result<()>` - Success or the underlying write error
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Renderer that prints prompts to standard output.
pub struct StdoutRenderer {
    writer: io::Stdout,
}

impl StdoutRenderer {
    pub fn new() -> Self {
        Self { writer: io::stdout() }
    }
}

impl Default for StdoutRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRenderer for StdoutRenderer {
    fn write(&mut self, text: &str) -> io::Result<()> {
        write_prompt(&mut self.writer, text)
    }
}

/// Writes `text` and a trailing newline, flushing so the prompt is visible
/// before the engine blocks on input.
fn write_prompt(mut writer: impl Write, text: &str) -> io::Result<()> {
    writeln!(writer, "{text}")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that fails every write with a broken pipe error.
    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink that records whether it was flushed.
    #[derive(Default)]
    struct FlushTrackingSink {
        buffer: Vec<u8>,
        flushed: bool,
    }

    impl Write for FlushTrackingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    #[test]
    fn appends_line_terminator_to_prompt_text() {
        let mut sink = Vec::new();
        write_prompt(&mut sink, "What is your name?").unwrap();
        assert_eq!(sink, b"What is your name?\n");
    }

    #[test]
    fn flushes_after_writing_the_prompt() {
        let mut sink = FlushTrackingSink::default();
        write_prompt(&mut sink, "Continue?").unwrap();
        assert!(sink.flushed);
        assert_eq!(sink.buffer, b"Continue?\n");
    }

    #[test]
    fn propagates_write_errors() {
        let err = write_prompt(ClosedSink, "Anyone there?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn stdout_renderer_writes_successfully() {
        let mut renderer = StdoutRenderer::default();
        renderer.write("Ready?").unwrap();
    }
}
