//! Fleep Cleaner - bulk-delete oversized file attachments from a Fleep
//! chat export.
//!
//! The tool parses the account export's message history, reconstructs the
//! attachments authored by the account's own profile, filters them by size
//! and extension, and deletes the matches through Fleep's HTTP API after
//! an interactive confirmation.

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::io;
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    collect_attachments, confirm_deletion, delete_selected, format_selection_summary,
    format_selection_table, read_export, select_attachments, SelectOptions,
};
use cli::{Cli, Commands};
use domain::{AppConfig, AppError, Selection, Session};
use infrastructure::{
    ensure_config_exists, ensure_data_dir, ensure_export_archive, extract_archive, load_config,
    FleepClient,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    ensure_config_exists()?;
    let config = load_config()?;

    match cli.command {
        Commands::Clean {
            email,
            password,
            min_size,
            ext,
        } => cmd_clean(&config, &email, &password, min_size, &ext),
        Commands::CleanFile {
            email,
            password,
            file,
            min_size,
            ext,
        } => cmd_clean_file(&config, &email, &password, &file, min_size, &ext),
        Commands::Scan {
            file,
            min_size,
            ext,
        } => cmd_scan(&config, &file, min_size, &ext),
    }
}

/// Self-downloading variant: fetch the export from Fleep, then clean.
fn cmd_clean(
    config: &AppConfig,
    email: &str,
    password: &str,
    min_size: f64,
    ext: &str,
) -> domain::Result<()> {
    let client = FleepClient::new(&config.api.base_url)?;

    println!("Signing in to Fleep...");
    let session = client.login(email, password)?;

    println!("Fetching export reference...");
    let export_ref = client.fetch_export_ref(&session)?;

    let data_dir = ensure_data_dir(config)?;

    println!("Downloading export archive...");
    let archive_path = ensure_export_archive(&client, &session, &export_ref, &data_dir)?;

    let export_path = data_dir.join(&export_ref.file_name);
    if export_path.exists() {
        println!("Export already extracted, reusing it.");
    } else {
        println!("Extracting export archive...");
        extract_archive(&archive_path, &data_dir)?;
    }

    run_cleanup(config, &client, &session, &export_path, min_size, ext)
}

/// Offline variant: clean using a previously exported JSON file.
fn cmd_clean_file(
    config: &AppConfig,
    email: &str,
    password: &str,
    file: &Path,
    min_size: f64,
    ext: &str,
) -> domain::Result<()> {
    let client = FleepClient::new(&config.api.base_url)?;

    println!("Signing in to Fleep...");
    let session = client.login(email, password)?;

    run_cleanup(config, &client, &session, file, min_size, ext)
}

/// Dry run: list matching attachments from a local export file.
fn cmd_scan(config: &AppConfig, file: &Path, min_size: f64, ext: &str) -> domain::Result<()> {
    let selection = parse_and_select(config, file, min_size, ext)?;

    if selection.is_empty() {
        println!("No matching attachments found.");
        return Ok(());
    }

    println!("{}", format_selection_table(&selection.records));
    println!("{}", format_selection_summary(&selection));

    Ok(())
}

/// Shared tail of both cleaning variants: parse, select, confirm, delete.
fn run_cleanup(
    config: &AppConfig,
    client: &FleepClient,
    session: &Session,
    export_path: &Path,
    min_size: f64,
    ext: &str,
) -> domain::Result<()> {
    let selection = parse_and_select(config, export_path, min_size, ext)?;

    if selection.is_empty() {
        println!("No matching attachments found. Nothing to delete.");
        return Ok(());
    }

    println!("{}", format_selection_table(&selection.records));
    println!("{}", format_selection_summary(&selection));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let confirmed = confirm_deletion(&mut input, &mut output)
        .map_err(|e| AppError::io("Failed to read confirmation", e))?;

    if !confirmed {
        println!("Aborted. Nothing was deleted.");
        return Ok(());
    }

    println!("Deleting attachments...");
    let result = delete_selected(client, session, &selection)?;

    println!(
        "{} Cleanup completed. Deleted {} files ({:.1} MB).",
        "✓".green().bold(),
        result.deleted,
        result.total_mb
    );

    Ok(())
}

/// Parses an export file and applies the size/extension filters.
fn parse_and_select(
    config: &AppConfig,
    export_path: &Path,
    min_size: f64,
    ext: &str,
) -> domain::Result<Selection> {
    println!("Parsing export file: {}", export_path.display());
    let export = read_export(export_path)?;
    let records = collect_attachments(&export, &config.api.base_url)?;

    let options = SelectOptions {
        min_size_mb: min_size,
        extension: ext.to_string(),
    };

    Ok(select_attachments(records, &options))
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
