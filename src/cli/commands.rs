use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{info, Level};

use crate::cli::args::Cli;
use crate::error::{ProcessingError, Result};
use crate::processors::ParallelProcessor;
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;

pub fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();

    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(
        cli.workers,
        cli.discovery_bytes,
        cli.skip_unknown,
    )?;

    info!("Input file: {}", cli.input.display());
    info!(
        "Workers: {}, discovery window: {} bytes, unknown stations: {:?}",
        settings.max_workers,
        settings.discovery_bytes,
        settings.unknown_station_policy()
    );

    let progress = ProgressReporter::new(
        settings.max_workers as u64,
        "Processing measurements...",
        !cli.progress,
    );

    let processor = ParallelProcessor::from_settings(&settings);
    let aggregation = processor.process_file(&cli.input, Some(&progress))?;

    let report = ReportWriter::new(cli.format).write(&aggregation.summaries())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;

    info!(
        "Aggregated {} lines across {} stations",
        aggregation.totals.lines,
        aggregation.registry.len()
    );

    if cli.timing {
        eprintln!("{}ms", started.elapsed().as_millis());
    }

    Ok(())
}

/// Diagnostics go to stderr or a log file so stdout carries only the report
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };

    installed.map_err(|e| ProcessingError::Config(format!("Failed to initialise logging: {}", e)))
}
