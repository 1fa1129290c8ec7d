//! Main entry point for the runtar CLI application.
//!
//! This binary provides a command-line interface for listing and
//! extracting members of POSIX tar archives.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use runtar::{Cli, LocalFileReader, ReadAt, TarExtractor};

/// Application entry point.
///
/// Parses command-line arguments, indexes the archive, and dispatches to
/// list or extract mode. Any failure exits with a non-zero status.
fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let reader = Arc::new(LocalFileReader::new(Path::new(&cli.archive))?);
    let extractor = TarExtractor::new(reader)?;

    info!(
        archive = %cli.archive,
        size = extractor.archive_size(),
        members = extractor.entries().len(),
        "archive indexed"
    );

    // List mode: display archive contents and exit
    if cli.list || cli.verbose {
        return list_files(&extractor, cli.verbose);
    }

    extract(&extractor, &cli)
}

/// List members of the tar archive.
///
/// Supports two output formats:
/// - Simple format (`-l`): just member names, one per line
/// - Verbose format (`-v`): size and payload offset per member, with totals
fn list_files<R: ReadAt>(extractor: &TarExtractor<R>, verbose: bool) -> Result<()> {
    if verbose {
        println!("{:>10}  {:>10}  Name", "Size", "Offset");
        println!("{}", "-".repeat(48));
    }

    let mut total_size = 0u64;
    for entry in extractor.entries() {
        if verbose {
            println!("{:>10}  {:>10}  {}", entry.size, entry.data_offset, entry.name);
            total_size += entry.size;
        } else {
            println!("{}", entry.name);
        }
    }

    if verbose {
        println!("{}", "-".repeat(48));
        println!(
            "{:>10}  {:>10}  {} files",
            total_size,
            "",
            extractor.entries().len()
        );
    }

    Ok(())
}

/// Extract archive members based on CLI options.
///
/// With no positional FILES, every indexed member is extracted. Otherwise
/// only members whose full name or base name matches a requested name are
/// extracted, and a request that matches nothing is an error.
fn extract<R: ReadAt>(extractor: &TarExtractor<R>, cli: &Cli) -> Result<()> {
    let output_dir = Path::new(&cli.output_dir);

    if cli.files.is_empty() {
        extractor.extract_all(output_dir)?;
        if !cli.is_quiet() {
            println!(
                "extracted {} members to {}",
                extractor.entries().len(),
                output_dir.display()
            );
        }
        return Ok(());
    }

    std::fs::create_dir_all(output_dir)?;

    for requested in &cli.files {
        let entry = extractor
            .entries()
            .iter()
            .find(|e| e.name == *requested || e.base_name() == *requested);

        let Some(entry) = entry else {
            bail!("member `{}` not found in {}", requested, cli.archive);
        };

        if !cli.is_quiet() {
            println!("  extracting: {}", entry.name);
        }
        extractor.extract_to_file(entry, &output_dir.join(entry.base_name()))?;
    }

    Ok(())
}
