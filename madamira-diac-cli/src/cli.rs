//! Command-line argument surface

use std::path::PathBuf;

use clap::Parser;

use crate::client::{MadamiraClient, DEFAULT_URL};
use crate::error::CliResult;
use crate::{commands, input, output};
use madamira_diac_core::RequestConfig;

/// Diacritize Arabic text with MADAMIRA in server mode
#[derive(Debug, Parser)]
#[command(name = "madamira-diac", version)]
pub struct Cli {
    /// Input file (default: standard input)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: standard output)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// MADAMIRA server URL
    #[arg(short, long, value_name = "URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Send all lines to MADAMIRA at once instead of one request per line
    #[arg(short, long)]
    pub all: bool,

    /// Preprocess text
    #[arg(short, long)]
    pub preprocess: bool,

    /// Separate punctuation
    #[arg(short, long)]
    pub separate_punct: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the diacritization run.
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::debug!("arguments: {:?}", self);

        let reader = input::open_input(self.input.as_deref())?;
        let mut writer = output::open_output(self.output.as_deref())?;

        let client = MadamiraClient::new(self.url.clone());
        log::info!("using MADAMIRA server at {}", client.url());
        let config = RequestConfig::new(self.preprocess, self.separate_punct);

        if self.all {
            commands::diacritize_batch(&client, &config, reader, &mut writer)
        } else {
            commands::diacritize_lines(&client, &config, reader, &mut writer)
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["madamira-diac"]);

        assert_eq!(cli.url, DEFAULT_URL);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.all);
        assert!(!cli.preprocess);
        assert!(!cli.separate_punct);
    }

    #[test]
    fn test_all_flags_parse() {
        let cli = Cli::parse_from([
            "madamira-diac",
            "-i",
            "in.txt",
            "-o",
            "out.txt",
            "-u",
            "http://example.com:9000",
            "--all",
            "--preprocess",
            "--separate-punct",
            "-q",
            "-vv",
        ]);

        assert_eq!(cli.input.as_deref().unwrap().to_str().unwrap(), "in.txt");
        assert_eq!(cli.output.as_deref().unwrap().to_str().unwrap(), "out.txt");
        assert_eq!(cli.url, "http://example.com:9000");
        assert!(cli.all);
        assert!(cli.preprocess);
        assert!(cli.separate_punct);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }
}
