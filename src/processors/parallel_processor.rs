use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{AccumulatorTable, StationRegistry, StationSummary};
use crate::processors::{
    partition, Aggregator, ScanTotals, StationDiscovery, UnknownStationPolicy, WorkerOutput,
    WorkerScanner,
};
use crate::readers::MappedInput;
use crate::settings::Settings;
use crate::utils::constants::DEFAULT_DISCOVERY_BYTES;
use crate::utils::progress::ProgressReporter;
use crate::writers::report_writer;

pub struct ParallelProcessor {
    max_workers: usize,
    discovery_bytes: usize,
    unknown_station_policy: UnknownStationPolicy,
}

/// Merged statistics for every discovered station
#[derive(Debug)]
pub struct Aggregation {
    pub registry: StationRegistry,
    pub stations: AccumulatorTable,
    pub totals: ScanTotals,
}

impl Aggregation {
    /// Observed stations in byte-wise name order
    pub fn summaries(&self) -> Vec<StationSummary> {
        report_writer::summaries(&self.registry, &self.stations)
    }

    /// `{name=min/mean/max, ...}` summary line
    pub fn render(&self) -> String {
        report_writer::render(&self.registry, &self.stations)
    }
}

impl ParallelProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            discovery_bytes: DEFAULT_DISCOVERY_BYTES,
            unknown_station_policy: UnknownStationPolicy::Fail,
        }
    }

    pub fn with_discovery_bytes(mut self, discovery_bytes: usize) -> Self {
        self.discovery_bytes = discovery_bytes;
        self
    }

    pub fn with_unknown_station_policy(mut self, policy: UnknownStationPolicy) -> Self {
        self.unknown_station_policy = policy;
        self
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.max_workers)
            .with_discovery_bytes(settings.discovery_bytes)
            .with_unknown_station_policy(settings.unknown_station_policy())
    }

    /// Map `path` and aggregate its contents. The mapping is released before
    /// returning, on success and on error.
    pub fn process_file(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<Aggregation> {
        let input = MappedInput::open(path)?;
        debug!("Processing {} ({} bytes)", input.path().display(), input.len());
        self.process_bytes(input.as_bytes(), progress)
    }

    /// Discover stations, scan line-aligned ranges in parallel, merge
    pub fn process_bytes(
        &self,
        data: &[u8],
        progress: Option<&ProgressReporter>,
    ) -> Result<Aggregation> {
        if let Some(p) = progress {
            p.set_message("Discovering stations...");
        }

        let registry = StationDiscovery::new(self.discovery_bytes).discover(data)?;
        let ranges = partition(data, self.max_workers);

        info!(
            "Scanning {} bytes for {} stations with {} workers",
            data.len(),
            registry.len(),
            ranges.len()
        );

        if let Some(p) = progress {
            p.set_message("Scanning worker ranges...");
        }

        // Configure Rayon thread pool
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()?;

        let scanner = WorkerScanner::new(&registry, self.unknown_station_policy);

        let outputs: Vec<WorkerOutput> = pool.install(|| {
            ranges
                .par_iter()
                .enumerate()
                .map(|(worker, range)| -> Result<WorkerOutput> {
                    let output = scanner.scan(data, *range)?;
                    debug!(
                        "Worker {} scanned bytes {}..{}: {} lines",
                        worker, range.start, range.end, output.lines
                    );

                    if let Some(p) = progress {
                        p.increment(1);
                    }

                    Ok(output)
                })
                .collect::<Result<Vec<_>>>()
        })?;

        let (stations, totals) = Aggregator::new(registry.len()).merge_outputs(outputs);

        if totals.skipped > 0 {
            warn!(
                "Skipped {} lines for stations missing from the first {} bytes",
                totals.skipped, self.discovery_bytes
            );
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!("Aggregated {} lines", totals.lines));
        }

        Ok(Aggregation {
            registry,
            stations,
            totals,
        })
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
