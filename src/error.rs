use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The renderer failed while displaying a question.
    #[error("Failed to write prompt. Original error: {0}")]
    WriteError(#[source] std::io::Error),

    /// The input source failed before a complete answer was read.
    #[error("Failed to read answer. Original error: {0}")]
    ReadError(#[source] std::io::Error),
}

/// Convenience type alias for Results with asker's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;
