//! Core pipeline for diacritizing Arabic text with a MADAMIRA server.
//!
//! This crate implements the two halves of the client pipeline: building the
//! XML job document MADAMIRA expects ([`RequestConfig::build_request`]) and
//! pulling diacritized sentences out of the XML response stream
//! ([`extract`]). Transport and file handling live in the CLI crate.

pub mod config;
pub mod error;
pub mod extract;

pub use config::RequestConfig;
pub use error::{Error, Result};
pub use extract::{extract, Sentences};
