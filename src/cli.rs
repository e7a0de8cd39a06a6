// Command-line interface definitions and parsing for perfviz

use crate::core::constants::summary_formats;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Visualize load-test performance metrics from a CSV file", long_about = None)]
pub struct Cli {
    /// Metrics CSV file (default: newest metrics_*.csv in the working directory)
    pub file: Option<PathBuf>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Console summary format
    #[arg(long, value_name = "FORMAT", value_parser = summary_formats::ALL, default_value = summary_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_cli__no_args() {
        let cli = Cli::parse_from(["perfviz"]);
        assert!(cli.file.is_none());
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_cli__positional_file_and_flags() {
        let cli = Cli::parse_from(["perfviz", "metrics_run.csv", "-q", "--format", "json"]);
        assert_eq!(cli.file.unwrap(), PathBuf::from("metrics_run.csv"));
        assert!(cli.quiet);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli__rejects_unknown_format() {
        assert!(Cli::try_parse_from(["perfviz", "--format", "xml"]).is_err());
    }
}
