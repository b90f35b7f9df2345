//! Output setup: file or standard output

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Open the output sink as a buffered writer.
///
/// `None` means standard output. The run loop flushes explicitly after each
/// unit of work, so buffering here never delays completed results.
pub fn open_output(path: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| CliError::OutputOpen(format!("{}: {}", path.display(), e)))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.txt");

        {
            let mut writer = open_output(Some(&file_path)).unwrap();
            writeln!(writer, "مَرْحَبًا").unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "مَرْحَبًا\n");
    }

    #[test]
    fn test_open_output_unwritable_path() {
        let result = open_output(Some(Path::new("/nonexistent/dir/out.txt")));

        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("Couldn't open output file"));
    }

    #[test]
    fn test_open_output_stdout() {
        assert!(open_output(None).is_ok());
    }
}
