//! docker-scaffold generates a Dockerfile, a Compose file, a `.dockerignore`
//! and a GitHub Actions workflow for a Node.js project. Configuration comes
//! from command line flags, interactive answers and built-in defaults.

/// Command-line interface module
pub mod cli;

/// Configuration records and deployment targets
pub mod config;

/// Output file names
pub mod constants;

/// Error types and handling
pub mod error;

/// Renders templates and writes the output files
pub mod generator;

/// User input and interaction handling
pub mod prompt;

/// Question descriptors and the context their relevance predicates see
pub mod question;

/// The ordered list of questions, including the deferred target questions
pub mod questionnaire;

/// Console banner and summary
pub mod report;

/// Template rendering with MiniJinja
pub mod renderer;

/// Merges explicit options, answers and defaults into the final configuration
pub mod resolver;
