//! Dense segment-flag track.

use super::{Track, TrackKind};
use crate::range::StationRange;

/// Occupancy stored as one flag per unit segment.
///
/// `segments[i]` is `true` iff an accepted booking covers `[i, i + 1)`.
/// A line of `n` stations has `n - 1` segments.
///
/// # Panics
///
/// Queries and bookings index the flag vector directly: a range ending past
/// the last segment panics. Callers are expected to validate ranges first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTrack {
    segments: Vec<bool>,
}

impl SegmentTrack {
    /// Creates a track with every segment free.
    pub fn new(total_stations: usize) -> Self {
        Self {
            segments: vec![false; total_stations.saturating_sub(1)],
        }
    }

    /// Returns true if every segment of `range` is free.
    pub fn is_available(&self, range: StationRange) -> bool {
        !self.segments[range.segments()].contains(&true)
    }

    /// Marks every segment of `range` occupied, or nothing if any is taken.
    pub fn book(&mut self, range: StationRange) -> bool {
        if !self.is_available(range) {
            return false;
        }
        self.segments[range.segments()].fill(true);
        true
    }

    /// Raw segment flags.
    pub fn segments(&self) -> &[bool] {
        &self.segments
    }

    /// Number of occupied segments.
    pub fn occupied_segments(&self) -> usize {
        self.segments.iter().filter(|&&taken| taken).count()
    }

    /// Each unit segment with its occupancy flag, in line order.
    pub fn segment_status(&self) -> impl Iterator<Item = (StationRange, bool)> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, &taken)| (StationRange::segment(i), taken))
    }

    /// Maximal runs of occupied segments.
    ///
    /// Bookings that touch end to end are indistinguishable here and come
    /// out as a single run.
    pub fn occupied_runs(&self) -> Vec<StationRange> {
        let mut runs = Vec::new();
        let mut run_start: Option<usize> = None;
        for (i, &taken) in self.segments.iter().enumerate() {
            match (taken, run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    runs.extend(StationRange::new(start, i));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            runs.extend(StationRange::new(start, self.segments.len()));
        }
        runs
    }
}

impl Track for SegmentTrack {
    fn kind(&self) -> TrackKind {
        TrackKind::Segment
    }

    fn is_available(&self, range: StationRange) -> bool {
        SegmentTrack::is_available(self, range)
    }

    fn book(&mut self, range: StationRange) -> bool {
        SegmentTrack::book(self, range)
    }

    fn bookings(&self) -> Vec<StationRange> {
        self.occupied_runs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: usize, end: usize) -> StationRange {
        StationRange::new(start, end).unwrap()
    }

    #[test]
    fn new_track_has_free_segments() {
        let track = SegmentTrack::new(10);
        assert_eq!(track.segments().len(), 9);
        assert_eq!(track.occupied_segments(), 0);
        assert!(track.is_available(r(0, 9)));
    }

    #[test]
    fn book_marks_exactly_the_range() {
        let mut track = SegmentTrack::new(10);
        assert!(track.book(r(2, 5)));
        assert_eq!(
            track.segments(),
            &[false, false, true, true, true, false, false, false, false]
        );
        assert!(!track.is_available(r(4, 6)));
        assert!(track.is_available(r(5, 9)));
        assert!(track.is_available(r(0, 2)));
    }

    #[test]
    fn conflicting_book_is_all_or_nothing() {
        let mut track = SegmentTrack::new(10);
        assert!(track.book(r(4, 6)));
        let before = track.clone();
        assert!(!track.book(r(2, 5)));
        assert_eq!(track, before);
    }

    #[test]
    fn adjacent_ranges_both_book() {
        let mut track = SegmentTrack::new(10);
        assert!(track.book(r(1, 4)));
        assert!(track.book(r(4, 7)));
        assert_eq!(track.occupied_segments(), 6);
    }

    #[test]
    fn occupied_runs_merge_touching_bookings() {
        let mut track = SegmentTrack::new(10);
        track.book(r(0, 3));
        track.book(r(3, 4));
        track.book(r(7, 9));
        assert_eq!(track.occupied_runs(), vec![r(0, 4), r(7, 9)]);
    }

    #[test]
    fn segment_status_lists_every_segment() {
        let mut track = SegmentTrack::new(4);
        track.book(r(1, 2));
        let status: Vec<_> = track.segment_status().collect();
        assert_eq!(status, vec![(r(0, 1), false), (r(1, 2), true), (r(2, 3), false)]);
    }

    #[test]
    #[should_panic]
    fn range_past_last_segment_panics() {
        let track = SegmentTrack::new(10);
        track.is_available(r(5, 10));
    }
}
