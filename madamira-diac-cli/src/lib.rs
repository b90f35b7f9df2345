//! MADAMIRA diacritization CLI library
//!
//! This library provides the command-line interface for diacritizing Arabic
//! text with a MADAMIRA server: argument parsing, file and stdio setup, the
//! HTTP transport, and the serial request loop.

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
