//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file could not be opened
    InputOpen(String),
    /// Output file could not be opened
    OutputOpen(String),
    /// Input bytes are not valid UTF-8
    Encoding(String),
    /// The MADAMIRA server could not be reached or rejected the request
    Server(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputOpen(msg) => write!(f, "Couldn't open input file: {msg}"),
            CliError::OutputOpen(msg) => write!(f, "Couldn't open output file: {msg}"),
            CliError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
            CliError::Server(msg) => write!(f, "MADAMIRA server error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
