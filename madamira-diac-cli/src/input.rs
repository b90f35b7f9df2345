//! Input setup: file or standard input

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Open the input source as a buffered reader.
///
/// `None` means standard input (the original tool's default).
pub fn open_input(path: Option<&Path>) -> CliResult<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| CliError::InputOpen(format!("{}: {}", path.display(), e)))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}
