use crate::models::WorkerRange;
use crate::readers::next_line_start;

/// Split `data` into `worker_count` contiguous line-aligned ranges.
///
/// Boundaries start at multiples of `len / worker_count` and are moved
/// forward to the next line start, so each line lands in exactly one range.
/// The last range always ends at `data.len()`. Small inputs may produce
/// empty ranges.
pub fn partition(data: &[u8], worker_count: usize) -> Vec<WorkerRange> {
    let len = data.len();
    let workers = worker_count.max(1);
    let chunk_size = len / workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;

    for i in 1..=workers {
        let end = if i == workers {
            len
        } else {
            next_line_start(data, (i * chunk_size).max(start))
        };
        ranges.push(WorkerRange::new(start, end));
        start = end;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::RecordLines;

    fn sample_data(lines: usize) -> Vec<u8> {
        let mut data = Vec::new();
        for i in 0..lines {
            data.extend_from_slice(format!("station-{};{}.{}\n", i % 7, i % 50, i % 10).as_bytes());
        }
        data
    }

    fn count_lines(data: &[u8]) -> usize {
        RecordLines::new(data, 0).count()
    }

    #[test]
    fn test_ranges_cover_input_without_gaps() {
        let data = sample_data(1000);

        for workers in 1..=16 {
            let ranges = partition(&data, workers);

            assert_eq!(ranges.len(), workers);
            assert_eq!(ranges[0].start, 0);
            assert_eq!(ranges[workers - 1].end, data.len());
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_every_line_counted_once() {
        let data = sample_data(997);

        for workers in [1, 2, 3, 8, 13, 64] {
            let ranges = partition(&data, workers);

            for range in &ranges {
                if range.start > 0 {
                    assert_eq!(data[range.start - 1], b'\n');
                }
            }

            let total: usize = ranges.iter().map(|r| count_lines(r.slice(&data))).sum();
            assert_eq!(total, 997, "workers = {}", workers);
        }
    }

    #[test]
    fn test_more_workers_than_lines() {
        let data = b"A;1.0\nB;2.0\n";
        let ranges = partition(data, 8);

        assert_eq!(ranges.len(), 8);
        let non_empty: Vec<_> = ranges.iter().filter(|r| !r.is_empty()).collect();
        assert_eq!(non_empty.len(), 2);
        assert_eq!(ranges.iter().map(|r| r.len()).sum::<usize>(), data.len());
    }

    #[test]
    fn test_empty_input() {
        let ranges = partition(b"", 4);
        assert_eq!(ranges.len(), 4);
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_missing_trailing_newline() {
        let data = b"A;1.0\nB;2.0\nC;3.0";
        let ranges = partition(data, 2);

        assert_eq!(ranges[1].end, data.len());
        let total: usize = ranges.iter().map(|r| count_lines(r.slice(data))).sum();
        assert_eq!(total, 3);
    }
}
