use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::StationRegistry;
use crate::readers::{next_line_start, split_record, RecordLines};
use crate::utils::constants::DEFAULT_DISCOVERY_BYTES;

/// Sequential pass over the start of the input that builds the station
/// registry before the parallel scan.
///
/// Every distinct station must appear within the discovery window; stations
/// that only occur later are handled by the scanner's
/// [`UnknownStationPolicy`](crate::processors::UnknownStationPolicy).
pub struct StationDiscovery {
    discovery_bytes: usize,
}

impl StationDiscovery {
    pub fn new(discovery_bytes: usize) -> Self {
        Self { discovery_bytes }
    }

    /// Leading bytes of `data` to scan: the first `discovery_bytes`, extended
    /// to the end of the line straddling the threshold.
    pub fn window<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        let end = next_line_start(data, self.discovery_bytes.min(data.len()));
        &data[..end]
    }

    pub fn discover(&self, data: &[u8]) -> Result<StationRegistry> {
        let window = self.window(data);
        let registry = discover(window)?;
        debug!(
            "Discovered {} stations in first {} bytes",
            registry.len(),
            window.len()
        );
        Ok(registry)
    }
}

impl Default for StationDiscovery {
    fn default() -> Self {
        Self::new(DEFAULT_DISCOVERY_BYTES)
    }
}

/// Register every station named in `prefix`, in order of first appearance
pub fn discover(prefix: &[u8]) -> Result<StationRegistry> {
    let mut registry = StationRegistry::new();

    for (offset, line) in RecordLines::new(prefix, 0) {
        if line.is_empty() {
            continue;
        }
        let (name, _) = split_record(line).ok_or_else(|| {
            ProcessingError::InvalidFormat(format!("Missing ';' delimiter in line at byte {}", offset))
        })?;
        registry.register(name)?;
    }

    Ok(registry)
}
