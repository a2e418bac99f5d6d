//! Error handling for docker-scaffold.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while resolving configuration or generating files.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine (missing or invalid templates)
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors while building or reading the JSON template context
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents failures of the interactive prompt (closed terminal, interrupted input)
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents an inconsistent configuration record
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Wraps the failure of a single output file so the user sees which one broke
    #[error("Error generating {file}: {source}")]
    GenerationError {
        file: String,
        #[source]
        source: Box<Error>,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", console::style(format!("Error generating files: {err}")).red());
    std::process::exit(1);
}
