/// Defines custom error types.
pub mod error;

/// Constants used throughout the library.
pub mod constants;

/// Prompt display backends.
pub mod renderer;

/// The interactive prompt engine and its configuration options.
pub mod prompt;

mod input;
