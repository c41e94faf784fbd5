//! Line-oriented input sources backing the prompt engine.
//!
//! The engine reads answers through [`AnswerSource`], which exposes the two
//! modes the input stream can be in: normal echoed line reading and secret
//! entry with terminal echo disabled. [`StdinSource`] is the production
//! implementation over the process's standard input.

use std::io::{self, BufRead, BufReader, IsTerminal, Stdin};

/// A source of interactive answers.
pub(crate) trait AnswerSource {
    /// Reads one newline-terminated line, returning it exactly as typed,
    /// including the trailing newline.
    fn read_line(&mut self) -> io::Result<String>;

    /// Reads one line with terminal echo disabled, returning the entered
    /// text without a trailing newline.
    fn read_secret(&mut self) -> io::Result<String>;
}

/// Answer source bound to the process's standard input.
pub(crate) struct StdinSource {
    reader: BufReader<Stdin>,
}

impl StdinSource {
    pub(crate) fn new() -> Self {
        Self { reader: BufReader::new(io::stdin()) }
    }
}

impl AnswerSource for StdinSource {
    fn read_line(&mut self) -> io::Result<String> {
        read_full_line(&mut self.reader)
    }

    fn read_secret(&mut self) -> io::Result<String> {
        // Echo cannot be disabled on redirected input. The echo toggle
        // itself lives in `rpassword`, which restores the terminal state
        // on every exit path.
        if !io::stdin().is_terminal() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "standard input is not an interactive terminal",
            ));
        }
        rpassword::read_password()
    }
}

/// Reads one line including its trailing newline, failing with
/// `UnexpectedEof` when the stream ends before a full line arrives.
pub(crate) fn read_full_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 || !line.ends_with('\n') {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a full line was read",
        ));
    }
    Ok(line)
}
