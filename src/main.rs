//! phone-cleaner - Extract and clean phone numbers from CSV files.
//!
//! Reads the first column of a delimited table, strips every non-digit
//! character from each cell, keeps runs of more than 8 digits, and offers
//! the cleaned result as a columnar CSV, a comma-joined text file, a
//! terminal preview, and a copy-ready string.

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    columnar_artifact, extract_with_stats, format_preview_table, format_stats, joined_artifact,
    render_joined, render_preview, ExportFormat, ExtractCache,
};
use cli::{Cli, Commands};
use domain::{AppConfig, AppError, CleanedSequence};
use infrastructure::{
    ensure_config_exists, load_config, load_config_from_file, read_input, ArtifactWriter,
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
    let config = match cli.config.as_deref() {
        Some(path) => load_config_from_file(path)?,
        None => {
            ensure_config_exists()?;
            load_config()?
        }
    };

    // One caller-held cache for the whole invocation; repeated reads of
    // the same bytes reuse the computed sequence.
    let mut cache = ExtractCache::new();

    match cli.command {
        Commands::Clean {
            input,
            out_dir,
            format,
        } => {
            let format: ExportFormat = format
                .parse()
                .map_err(|e: String| AppError::Config { message: e })?;
            cmd_clean(&mut cache, &config, &input, out_dir, format)?;
        }
        Commands::Preview { input, limit } => {
            cmd_preview(&mut cache, &config, &input, limit)?;
        }
        Commands::Joined { input, output } => {
            cmd_joined(&mut cache, &input, output.as_deref())?;
        }
        Commands::Stats { input, json } => {
            cmd_stats(&input, json)?;
        }
    }

    Ok(())
}

/// Clean command: run the pipeline once and write the selected artifacts.
fn cmd_clean(
    cache: &mut ExtractCache,
    config: &AppConfig,
    input: &Path,
    out_dir: Option<PathBuf>,
    format: ExportFormat,
) -> domain::Result<()> {
    let bytes = read_input(input)?;
    let seq = cache.get_or_extract(&bytes)?;

    if seq.is_empty() {
        print_empty_warning();
        return Ok(());
    }

    println!(
        "{} {} cleaned numbers found.",
        "✓".green().bold(),
        seq.len()
    );

    let writer = ArtifactWriter::new(out_dir.unwrap_or_else(|| config.output.dir.clone()));

    let artifacts = match format {
        ExportFormat::Both => vec![columnar_artifact(seq), joined_artifact(seq)],
        ExportFormat::Columnar => vec![columnar_artifact(seq)],
        ExportFormat::Joined => vec![joined_artifact(seq)],
    };

    for artifact in &artifacts {
        let path = writer.write(artifact)?;
        println!("{} {}", "✓".green(), path.display());
    }

    Ok(())
}

/// Preview command: show the first cleaned numbers as a table.
fn cmd_preview(
    cache: &mut ExtractCache,
    config: &AppConfig,
    input: &Path,
    limit: Option<usize>,
) -> domain::Result<()> {
    let bytes = read_input(input)?;
    let seq = cache.get_or_extract(&bytes)?;

    if seq.is_empty() {
        print_empty_warning();
        return Ok(());
    }

    let limit = limit.unwrap_or(config.preview.limit);
    let preview = render_preview(seq, limit);

    println!("{}", format_preview_table(preview));
    println!("Showing {} of {} cleaned numbers.", preview.len(), seq.len());

    Ok(())
}

/// Joined command: print or save the comma-joined string.
fn cmd_joined(
    cache: &mut ExtractCache,
    input: &Path,
    output: Option<&Path>,
) -> domain::Result<()> {
    let bytes = read_input(input)?;
    let seq = cache.get_or_extract(&bytes)?;

    if seq.is_empty() {
        print_empty_warning();
        return Ok(());
    }

    match output {
        Some(path) => {
            let joined = render_joined(seq);
            fs::write(path, &joined)
                .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;
            println!(
                "{} Wrote {} numbers to {}",
                "✓".green().bold(),
                seq.len(),
                path.display()
            );
        }
        None => {
            println!("{}", joined_string(seq));
        }
    }

    Ok(())
}

/// Stats command: show extraction statistics.
fn cmd_stats(input: &Path, json: bool) -> domain::Result<()> {
    let bytes = read_input(input)?;
    let (_, stats) = extract_with_stats(&bytes)?;

    if json {
        let rendered = serde_json::to_string_pretty(&stats).map_err(|e| AppError::Config {
            message: format!("Failed to serialize statistics: {e}"),
        })?;
        println!("{rendered}");
    } else {
        println!("{}", format_stats(&stats));
    }

    Ok(())
}

/// The comma-joined sequence as a copy-ready string.
fn joined_string(seq: &CleanedSequence) -> String {
    String::from_utf8(render_joined(seq)).unwrap_or_default()
}

/// Informational outcome, not an error: the table parsed but nothing
/// passed the length filter. No artifacts are written.
fn print_empty_warning() {
    println!(
        "{} No qualifying numbers (more than 8 digits) found in the first column.",
        "Warning:".yellow().bold()
    );
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
