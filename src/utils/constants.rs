/// Record format
pub const FIELD_DELIMITER: u8 = b';';
pub const LINE_TERMINATOR: u8 = b'\n';

/// Station cardinality bound
pub const MAX_STATIONS: usize = 10_000;

/// Bytes scanned sequentially to discover station names
pub const DEFAULT_DISCOVERY_BYTES: usize = 1_000_000;

/// Environment variable prefix for settings (e.g. BRC_MAX_WORKERS)
pub const ENV_PREFIX: &str = "BRC";

/// Accumulator sentinels (+inf / -inf in the tenths domain)
pub const MIN_SENTINEL: i32 = i32::MAX;
pub const MAX_SENTINEL: i32 = i32::MIN;
