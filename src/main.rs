//! EXIF Date Sorter - moves photos into dated folders
//!
//! Exit status: `0` on success, `1` on a usage error or if the folder is
//! missing or unreadable, `2` if a sub-folder cannot be created, `3` if a
//! file cannot be moved.

use anyhow::Result;
use clap::Parser;
use exif_date_sorter::{Cli, Config, Processor, output};
use std::path::Path;
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

fn main() -> Result<()> {
    // Usage errors exit with 1; 2 means a sub-folder failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if cli.sample_config {
        print!("{}", Config::sample_config());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let guard = setup_logging(&config)?;

    info!(version = env!("CARGO_PKG_VERSION"), "EXIF Date Sorter starting");
    if config.verbose {
        info!(?config, "Configuration loaded");
    }

    let exit_code = run(config);

    // process::exit skips destructors, so flush the log file first
    drop(guard);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Scan the configured folder and return the process exit status
fn run(config: Config) -> i32 {
    let dry_run = config.dry_run;

    let mut processor = match Processor::new(config) {
        Ok(processor) => processor,
        Err(e) => {
            error!(error = %e, "Invalid target folder");
            output::print_error(&e.to_string());
            return e.exit_code();
        }
    };

    match processor.run() {
        Ok(_) => {
            let summary = processor.summary();
            output::print_summary(summary.found, summary.actioned, dry_run);
            if dry_run {
                output::print_warning("Dry run: no folders were created and no files were moved.");
            }
            0
        }
        Err(e) => {
            let summary = processor.summary();
            error!(
                error = %e,
                found = summary.found,
                actioned = summary.actioned,
                "Scan aborted"
            );
            output::print_error(&format!("Error! Giving up: {}", e));
            e.exit_code()
        }
    }
}

/// Load configuration from file or CLI arguments
fn load_config(cli: &Cli) -> Result<Config> {
    let config = match cli.config {
        Some(ref path) => cli.merge_with_config(Config::load_from_file(path)?),
        None => cli.to_config(),
    };

    Ok(config)
}

/// Setup logging: console on stderr, plus an optional log file
///
/// The console only shows warnings unless verbose, since stdout already
/// carries the per-file report. The log file records every move.
fn setup_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    let (console_level, file_level) = if config.verbose {
        (Level::DEBUG, Level::DEBUG)
    } else {
        (Level::WARN, Level::INFO)
    };

    let filter = |level: Level| {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    };

    let mut guard = None;
    let file_layer: Option<Box<dyn Layer<Registry> + Send + Sync>> = match config.log_file {
        Some(ref log_path) => {
            let (non_blocking, worker_guard) =
                tracing_appender::non_blocking(open_log_file(log_path)?);
            guard = Some(worker_guard);

            let layer = if config.json_log {
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_filter(filter(file_level))
                    .boxed()
            } else {
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_filter(filter(file_level))
                    .boxed()
            };
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter(console_level)),
        )
        .init();

    Ok(guard)
}

fn open_log_file(log_path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    Ok(file)
}
