use crate::utils::constants::{MAX_SENTINEL, MIN_SENTINEL};

/// Running statistics for one station, in tenths of a degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    pub count: u64,
    pub sum: i64,
    pub min: i32,
    pub max: i32,
}

/// One slot per station identifier
pub type AccumulatorTable = Vec<Accumulator>;

pub fn new_table(station_count: usize) -> AccumulatorTable {
    vec![Accumulator::new(); station_count]
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: MIN_SENTINEL,
            max: MAX_SENTINEL,
        }
    }

    #[inline]
    pub fn record(&mut self, tenths: i32) {
        self.count += 1;
        self.sum += tenths as i64;
        self.min = self.min.min(tenths);
        self.max = self.max.max(tenths);
    }

    /// Fold another accumulator into this one. Empty accumulators carry
    /// sentinel min/max and are ignored.
    pub fn merge(&mut self, other: &Accumulator) {
        if other.is_empty() {
            return;
        }
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_widens_bounds() {
        let mut acc = Accumulator::new();
        acc.record(34);
        acc.record(-12);
        acc.record(50);

        assert_eq!(acc.count, 3);
        assert_eq!(acc.sum, 72);
        assert_eq!(acc.min, -12);
        assert_eq!(acc.max, 50);
    }

    #[test]
    fn test_merge_skips_empty() {
        let mut acc = Accumulator::new();
        acc.record(10);

        acc.merge(&Accumulator::new());
        assert_eq!(acc.count, 1);
        assert_eq!(acc.min, 10);
        assert_eq!(acc.max, 10);

        let mut empty = Accumulator::new();
        empty.merge(&acc);
        assert_eq!(empty, acc);
    }
}
