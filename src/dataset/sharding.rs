// src/dataset/sharding.rs

/// A half-open range of track indices `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRange {
    pub start: u32,
    pub end: u32,
}

impl TrackRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Compute the sub-range worker `worker_id` of `num_workers` owns.
///
/// Ranges are contiguous and disjoint and their union is exactly the
/// input range; ceil division means the last worker's range may be
/// shorter, or empty when there are more workers than tracks. The
/// returned value is a fresh range, callers never share or mutate a
/// common one.
pub fn worker_subrange(range: TrackRange, num_workers: u32, worker_id: u32) -> TrackRange {
    debug_assert!(worker_id < num_workers);

    let per_worker = range.len().div_ceil(num_workers);
    let start = (range.start + worker_id * per_worker).min(range.end);
    let end = (start + per_worker).min(range.end);
    TrackRange { start, end }
}

/// All worker sub-ranges of `range`, in worker order.
pub fn partition(range: TrackRange, num_workers: u32) -> Vec<TrackRange> {
    (0..num_workers)
        .map(|worker_id| worker_subrange(range, num_workers, worker_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let ranges = partition(TrackRange::new(0, 10548), 4);
        assert_eq!(
            ranges,
            vec![
                TrackRange::new(0, 2637),
                TrackRange::new(2637, 5274),
                TrackRange::new(5274, 7911),
                TrackRange::new(7911, 10548),
            ]
        );
    }

    #[test]
    fn test_uneven_split() {
        let ranges = partition(TrackRange::new(0, 10), 3);
        assert_eq!(
            ranges,
            vec![
                TrackRange::new(0, 4),
                TrackRange::new(4, 8),
                TrackRange::new(8, 10),
            ]
        );
    }

    #[test]
    fn test_union_is_exact() {
        let range = TrackRange::new(17, 230);
        for num_workers in 1..8 {
            let ranges = partition(range, num_workers);

            assert_eq!(ranges[0].start, range.start);
            assert_eq!(ranges.iter().map(TrackRange::len).sum::<u32>(), range.len());
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "gap or overlap between workers");
            }
            assert_eq!(ranges.last().unwrap().end, range.end);
        }
    }

    #[test]
    fn test_more_workers_than_tracks() {
        let ranges = partition(TrackRange::new(0, 2), 4);
        assert_eq!(ranges[0], TrackRange::new(0, 1));
        assert_eq!(ranges[1], TrackRange::new(1, 2));
        assert!(ranges[2].is_empty());
        assert!(ranges[3].is_empty());
    }

    #[test]
    fn test_empty_range() {
        for sub in partition(TrackRange::new(5, 5), 3) {
            assert!(sub.is_empty());
        }
    }

    #[test]
    fn test_nonzero_start() {
        let ranges = partition(TrackRange::new(100, 110), 3);
        assert_eq!(
            ranges,
            vec![
                TrackRange::new(100, 104),
                TrackRange::new(104, 108),
                TrackRange::new(108, 110),
            ]
        );
    }
}
