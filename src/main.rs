use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;

use camtools::config::Config;
use camtools::library::ToolLibraryDocument;
use camtools::renamer::{RenameEvent, ToolRenamer};
use camtools::scanner::NcScanner;
use cli::Cli;
use cli::commands::Commands;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("camtools")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("camtools.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Rename { input, output, dry_run } => {
            let input = input.as_deref().unwrap_or(&config.renamer.input);
            let output = output.as_deref().unwrap_or(&config.renamer.output);
            handle_rename_command(input, output, *dry_run, cli.is_verbose(), config)
        }
        Commands::Scan { root, pattern } => {
            let root = root.as_deref().unwrap_or(&config.scanner.root);
            handle_scan_command(root, pattern.as_deref(), config)
        }
    }
}

fn handle_rename_command(input: &Path, output: &Path, dry_run: bool, verbose: bool, config: &Config) -> Result<()> {
    info!("Renaming tool library {} -> {}", input.display(), output.display());

    let document = ToolLibraryDocument::load(input)
        .context(format!("Failed to read tool library {}", input.display()))?;
    let renamer = ToolRenamer::from_config(&config.renamer);

    let (renamed, summary) = renamer
        .rename_document_with(&document, |event| print_rename_event(event, verbose))
        .context("Failed to rename tool library")?;

    println!(
        "\n{} {} & {} {}",
        "Length of Input File Data".cyan(),
        summary.input,
        "Length of Output File Data".cyan(),
        summary.output
    );
    if verbose {
        println!(
            "  renamed {}, filtered {}, passed {}, dropped {}, duplicates {}",
            summary.renamed, summary.filtered, summary.passed_through, summary.dropped, summary.duplicates
        );
    }

    if dry_run {
        println!("{}", "Dry run, no file written".yellow());
        return Ok(());
    }

    renamed
        .save(output)
        .context(format!("Failed to write tool library {}", output.display()))?;
    println!("{} {}", "Created Modified Tool List".green(), output.display());
    Ok(())
}

fn print_rename_event(event: &RenameEvent, verbose: bool) {
    match event {
        RenameEvent::Evaluating { label } => {
            if verbose {
                println!("\n{} {}", "Evaluating".dimmed(), label.to_uppercase());
            }
        }
        RenameEvent::Filtered { label } => println!("{} {}", "Filtering out:".yellow(), label),
        RenameEvent::Renamed { description } => println!("{} {}", "Adding:".green(), description),
        RenameEvent::PassedThrough { label } => println!("{} {}", "Passing:".normal(), label),
        RenameEvent::Dropped { label } => println!("{} {}", "Dropping:".red(), label),
        RenameEvent::DedupStarted => println!("{}", "Beginning duplicate checks".cyan()),
        RenameEvent::Duplicate { description } => {
            println!("{} {}", description, "already present".yellow())
        }
    }
}

fn handle_scan_command(root: &Path, pattern: Option<&str>, config: &Config) -> Result<()> {
    let mut scanner_config = config.scanner.clone();
    if let Some(p) = pattern {
        scanner_config.feed_pattern = p.to_string();
    }
    let scanner = NcScanner::new(&scanner_config).context("Invalid feed pattern")?;
    info!("Scanning {} for /{}/", root.display(), scanner.pattern());
    println!("{}", "Identifying feed patterns".cyan());

    let report = scanner
        .scan_with(root, |found| {
            println!(
                "{} {}:{} {}",
                "Match:".green(),
                found.path.display(),
                found.line_number,
                found.line.trim_end()
            );
        })
        .context(format!("Failed to scan {}", root.display()))?;

    println!(
        "{} of {} programs matched",
        report.matches.len().to_string().bold(),
        report.candidates
    );
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
