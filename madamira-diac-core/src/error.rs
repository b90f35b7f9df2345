//! Error types for the core pipeline

use thiserror::Error;

/// Error type for response extraction
#[derive(Debug, Error)]
pub enum Error {
    /// The response byte stream is not well-formed XML
    #[error("malformed response XML: {0}")]
    Parse(#[from] quick_xml::Error),

    /// An element in the response carries malformed attribute syntax
    #[error("malformed attribute in response XML: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// The response stream ended before the document was closed
    #[error("response XML truncated: {0} element(s) left open")]
    Truncated(usize),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
