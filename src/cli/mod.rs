//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fleep Cleaner - bulk-delete oversized file attachments from a Fleep
/// chat export.
#[derive(Parser, Debug)]
#[command(name = "fleep-cleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the latest export from Fleep, then delete matching attachments.
    Clean {
        /// Fleep account email.
        #[arg(short, long)]
        email: String,

        /// Fleep account password.
        #[arg(short, long)]
        password: String,

        /// Minimum attachment size in megabytes (inclusive).
        #[arg(short = 's', long, default_value_t = 0.0)]
        min_size: f64,

        /// Only match attachments whose URL ends with this suffix
        /// (case-sensitive). Empty means no extension filter.
        #[arg(short = 'x', long, default_value = "")]
        ext: String,
    },

    /// Delete matching attachments listed in a previously exported JSON file.
    CleanFile {
        /// Fleep account email.
        #[arg(short, long)]
        email: String,

        /// Fleep account password.
        #[arg(short, long)]
        password: String,

        /// Path to the exported JSON file.
        #[arg(short, long)]
        file: PathBuf,

        /// Minimum attachment size in megabytes (inclusive).
        #[arg(short = 's', long)]
        min_size: f64,

        /// Only match attachments whose URL ends with this suffix
        /// (case-sensitive). Empty means no extension filter.
        #[arg(short = 'x', long, default_value = "")]
        ext: String,
    },

    /// List matching attachments from a local export file without deleting.
    Scan {
        /// Path to the exported JSON file.
        #[arg(short, long)]
        file: PathBuf,

        /// Minimum attachment size in megabytes (inclusive).
        #[arg(short = 's', long, default_value_t = 0.0)]
        min_size: f64,

        /// Only match attachments whose URL ends with this suffix
        /// (case-sensitive). Empty means no extension filter.
        #[arg(short = 'x', long, default_value = "")]
        ext: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_defaults_min_size_to_zero() {
        let cli = Cli::parse_from([
            "fleep-cleaner",
            "clean",
            "--email",
            "a@b.c",
            "--password",
            "pw",
        ]);

        match cli.command {
            Commands::Clean { min_size, ext, .. } => {
                assert_eq!(min_size, 0.0);
                assert!(ext.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_clean_file_requires_min_size() {
        let result = Cli::try_parse_from([
            "fleep-cleaner",
            "clean-file",
            "--email",
            "a@b.c",
            "--password",
            "pw",
            "--file",
            "export.json",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_clean_file_full_invocation() {
        let cli = Cli::parse_from([
            "fleep-cleaner",
            "clean-file",
            "-e",
            "a@b.c",
            "-p",
            "pw",
            "-f",
            "export.json",
            "-s",
            "1.5",
            "-x",
            ".pdf",
        ]);

        match cli.command {
            Commands::CleanFile {
                file,
                min_size,
                ext,
                ..
            } => {
                assert_eq!(file, PathBuf::from("export.json"));
                assert_eq!(min_size, 1.5);
                assert_eq!(ext, ".pdf");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_scan_needs_no_credentials() {
        let cli = Cli::parse_from(["fleep-cleaner", "scan", "-f", "export.json"]);
        assert!(matches!(cli.command, Commands::Scan { .. }));
    }
}
