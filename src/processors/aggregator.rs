use crate::models::{new_table, AccumulatorTable};
use crate::processors::worker_scanner::WorkerOutput;

/// Line counters summed across workers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub lines: u64,
    pub skipped: u64,
}

/// Folds per-worker accumulator tables into one table per station.
///
/// Sum, min and max are associative and commutative, so the result does not
/// depend on the order workers finish or are merged in.
pub struct Aggregator {
    station_count: usize,
}

impl Aggregator {
    pub fn new(station_count: usize) -> Self {
        Self { station_count }
    }

    pub fn merge_tables<I>(&self, tables: I) -> AccumulatorTable
    where
        I: IntoIterator<Item = AccumulatorTable>,
    {
        let mut merged = new_table(self.station_count);
        for table in tables {
            debug_assert_eq!(table.len(), self.station_count);
            for (slot, local) in merged.iter_mut().zip(table.iter()) {
                slot.merge(local);
            }
        }
        merged
    }

    pub fn merge_outputs(&self, outputs: Vec<WorkerOutput>) -> (AccumulatorTable, ScanTotals) {
        let mut totals = ScanTotals::default();
        let tables = outputs.into_iter().map(|output| {
            totals.lines += output.lines;
            totals.skipped += output.skipped;
            output.table
        });
        let merged = self.merge_tables(tables);
        (merged, totals)
    }
}
