//! The interactive prompt engine.
//!
//! [`Prompt`] writes questions through a [`PromptRenderer`] and reads the
//! answers from the process's standard input. Three interaction modes are
//! supported: plain text, secret entry with terminal echo disabled, and
//! yes/no confirmation with a retry loop.

use crate::{
    constants::{CONFIRMATION_HINT, CONFIRMATION_SUFFIX},
    error::{Error, Result},
    input::{AnswerSource, StdinSource},
    renderer::{PromptRenderer, StdoutRenderer},
};

/// Option function applied to a [`PromptConfig`] while a [`Prompt`] is
/// being constructed.
pub type PromptOption = Box<dyn FnOnce(&mut PromptConfig)>;

/// Configuration assembled during construction of a [`Prompt`].
///
/// The record only lives while the engine is being built; the finished
/// engine keeps the renderer and discards the rest.
pub struct PromptConfig {
    pub(crate) renderer: Box<dyn PromptRenderer>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { renderer: Box::new(StdoutRenderer::new()) }
    }
}

/// Replaces the renderer used to display questions.
pub fn with_renderer(renderer: impl PromptRenderer + 'static) -> PromptOption {
    Box::new(move |config| config.renderer = Box::new(renderer))
}

/// Interactive question client bound to the process's standard input.
///
/// A `Prompt` is not meant to be shared: every operation advances the
/// position of the single underlying input stream.
pub struct Prompt {
    input: Box<dyn AnswerSource>,
    renderer: Box<dyn PromptRenderer>,
}

impl Prompt {
    /// Creates a prompt that displays questions on standard output.
    pub fn new() -> Self {
        Self::with_options([])
    }

    /// Creates a prompt configured by `options`, applied in order over the
    /// defaults. Later options win when they touch the same field.
    pub fn with_options(options: impl IntoIterator<Item = PromptOption>) -> Self {
        let mut config = PromptConfig::default();
        for apply in options {
            apply(&mut config);
        }

        Self { input: Box::new(StdinSource::new()), renderer: config.renderer }
    }

    /// Asks `question` and returns one line of input exactly as typed,
    /// including its trailing newline.
    ///
    /// A renderer failure is returned immediately without reading any
    /// input; a closed or exhausted input source fails the read.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.renderer.write(question).map_err(Error::WriteError)?;

        self.input.read_line().map_err(Error::ReadError)
    }

    /// Asks `question` and reads the answer with terminal echo disabled.
    ///
    /// The entered text is returned without a trailing newline. Secret
    /// entry requires standard input to be an interactive terminal;
    /// redirected input fails with a read error.
    pub fn ask_securely(&mut self, question: &str) -> Result<String> {
        self.renderer.write(question).map_err(Error::WriteError)?;

        self.input.read_secret().map_err(Error::ReadError)
    }

    /// Asks a yes/no `question`, reading answers until one is recognized.
    ///
    /// The question is displayed once with a `" [y/n]:"` suffix. Answers
    /// are trimmed and lower-cased; `y`/`yes` confirm and `n`/`no` decline.
    /// Any other answer triggers a short hint and another read, without
    /// re-displaying the question. Read errors end the loop immediately.
    pub fn ask_for_confirmation(&mut self, question: &str) -> Result<bool> {
        self.renderer
            .write(&format!("{question}{CONFIRMATION_SUFFIX}"))
            .map_err(Error::WriteError)?;

        loop {
            let answer = self.input.read_line().map_err(Error::ReadError)?;

            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    // The hint is best-effort: a failed hint write must not
                    // abort a confirmation that is still awaiting input.
                    if let Err(e) = self.renderer.write(CONFIRMATION_HINT) {
                        log::warn!("Failed to write confirmation hint: {e}");
                    }
                }
            }
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}
