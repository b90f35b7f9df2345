//! Entry point for the madamira-diac binary

use clap::Parser;

use madamira_diac_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
