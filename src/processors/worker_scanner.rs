use crate::error::{ProcessingError, Result};
use crate::models::{new_table, AccumulatorTable, StationRegistry, WorkerRange};
use crate::readers::{decode_tenths, is_well_formed, split_record, RecordLines};

/// What to do with a record whose station was not seen during discovery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownStationPolicy {
    /// Abort the run with `ProcessingError::UnknownStation`
    #[default]
    Fail,
    /// Drop the record and count it as skipped
    Skip,
}

/// Private result of scanning one worker range
#[derive(Debug, Clone)]
pub struct WorkerOutput {
    pub table: AccumulatorTable,
    pub lines: u64,
    pub skipped: u64,
}

/// Scans byte ranges into a private accumulator table.
///
/// The scanner only reads the registry and the input buffer, so any number
/// of scanners may run concurrently over disjoint ranges.
pub struct WorkerScanner<'r> {
    registry: &'r StationRegistry,
    policy: UnknownStationPolicy,
}

impl<'r> WorkerScanner<'r> {
    pub fn new(registry: &'r StationRegistry, policy: UnknownStationPolicy) -> Self {
        Self { registry, policy }
    }

    /// Aggregate every line of `range`. Empty lines are ignored; a missing
    /// delimiter or malformed reading aborts the scan.
    pub fn scan(&self, data: &[u8], range: WorkerRange) -> Result<WorkerOutput> {
        let mut table = new_table(self.registry.len());
        let mut lines = 0u64;
        let mut skipped = 0u64;

        for (offset, line) in RecordLines::new(range.slice(data), range.start) {
            if line.is_empty() {
                continue;
            }

            let (name, reading) = split_record(line).ok_or_else(|| {
                ProcessingError::InvalidFormat(format!(
                    "Missing ';' delimiter in line at byte {}",
                    offset
                ))
            })?;

            if !is_well_formed(reading) {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Malformed reading '{}' at byte {}",
                    String::from_utf8_lossy(reading),
                    offset
                )));
            }

            let Some(id) = self.registry.lookup(name) else {
                match self.policy {
                    UnknownStationPolicy::Fail => {
                        return Err(ProcessingError::UnknownStation {
                            name: String::from_utf8_lossy(name).into_owned(),
                            offset,
                        })
                    }
                    UnknownStationPolicy::Skip => {
                        skipped += 1;
                        continue;
                    }
                }
            };

            table[id as usize].record(decode_tenths(reading));
            lines += 1;
        }

        Ok(WorkerOutput {
            table,
            lines,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::discovery::discover;

    fn whole(data: &[u8]) -> WorkerRange {
        WorkerRange::new(0, data.len())
    }

    #[test]
    fn test_scan_accumulates_per_station() {
        let data = b"A;3.4\nB;-1.2\nA;5.0\n";
        let registry = discover(data).unwrap();
        let scanner = WorkerScanner::new(&registry, UnknownStationPolicy::Fail);

        let output = scanner.scan(data, whole(data)).unwrap();

        assert_eq!(output.lines, 3);
        assert_eq!(output.skipped, 0);

        let a = output.table[registry.lookup(b"A").unwrap() as usize];
        assert_eq!((a.count, a.sum, a.min, a.max), (2, 84, 34, 50));

        let b = output.table[registry.lookup(b"B").unwrap() as usize];
        assert_eq!((b.count, b.sum, b.min, b.max), (1, -12, -12, -12));
    }

    #[test]
    fn test_scan_sub_range_only() {
        let data = b"A;1.0\nA;2.0\nA;3.0\n";
        let registry = discover(data).unwrap();
        let scanner = WorkerScanner::new(&registry, UnknownStationPolicy::Fail);

        let output = scanner.scan(data, WorkerRange::new(6, 12)).unwrap();

        assert_eq!(output.lines, 1);
        assert_eq!(output.table[0].sum, 20);
    }

    #[test]
    fn test_unknown_station_fails_by_default() {
        let registry = discover(b"A;1.0\n").unwrap();
        let data = b"A;1.0\nB;2.0\n";
        let scanner = WorkerScanner::new(&registry, UnknownStationPolicy::default());

        match scanner.scan(data, whole(data)) {
            Err(ProcessingError::UnknownStation { name, offset }) => {
                assert_eq!(name, "B");
                assert_eq!(offset, 6);
            }
            other => panic!("expected UnknownStation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_station_skipped() {
        let registry = discover(b"A;1.0\n").unwrap();
        let data = b"A;1.0\nB;2.0\nA;3.0\n";
        let scanner = WorkerScanner::new(&registry, UnknownStationPolicy::Skip);

        let output = scanner.scan(data, whole(data)).unwrap();

        assert_eq!(output.lines, 2);
        assert_eq!(output.skipped, 1);
        assert_eq!(output.table[0].count, 2);
    }

    #[test]
    fn test_malformed_reading_fails() {
        let data = b"A;1.0\nA;abc\n";
        let registry = discover(data).unwrap();
        let scanner = WorkerScanner::new(&registry, UnknownStationPolicy::Skip);

        let result = scanner.scan(data, whole(data));
        assert!(matches!(result, Err(ProcessingError::InvalidFormat(_))));
    }

    #[test]
    fn test_malformed_reading_fails_for_unknown_station() {
        let registry = discover(b"A;1.0\n").unwrap();
        let data = b"A;1.0\nA;2.0\nB;abc\n";
        let scanner = WorkerScanner::new(&registry, UnknownStationPolicy::Skip);

        match scanner.scan(data, whole(data)) {
            Err(ProcessingError::InvalidFormat(message)) => {
                assert!(message.contains("at byte 12"), "{}", message);
            }
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_lines_and_missing_trailing_newline() {
        let data = b"A;1.0\n\nA;2.0";
        let registry = discover(data).unwrap();
        let scanner = WorkerScanner::new(&registry, UnknownStationPolicy::Fail);

        let output = scanner.scan(data, whole(data)).unwrap();
        assert_eq!(output.lines, 2);
        assert_eq!(output.table[0].max, 20);
    }
}
