//! Sparse booking-list track.

use super::{Track, TrackKind};
use crate::range::StationRange;

/// Occupancy stored as the list of accepted bookings.
///
/// Bookings are kept sorted by start and pairwise disjoint: for consecutive
/// entries `a`, `b` we have `a.end() <= b.start()`. Touching bookings stay
/// separate entries.
///
/// # Complexity
/// - `has_conflict`: O(n)
/// - `add_booking`: O(n) conflict scan, O(log n) insertion point, O(n) shift
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalTrack {
    bookings: Vec<StationRange>,
}

impl IntervalTrack {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Returns true if `range` overlaps any existing booking.
    pub fn has_conflict(&self, range: StationRange) -> bool {
        self.bookings.iter().any(|booked| booked.overlaps(&range))
    }

    pub fn is_available(&self, range: StationRange) -> bool {
        !self.has_conflict(range)
    }

    /// Inserts `range` in start order unless it conflicts.
    ///
    /// The new entry goes before the first booking whose start is not
    /// smaller than its own.
    pub fn add_booking(&mut self, range: StationRange) -> bool {
        if self.has_conflict(range) {
            return false;
        }
        let at = self
            .bookings
            .partition_point(|booked| booked.start() < range.start());
        self.bookings.insert(at, range);
        true
    }

    /// Iterates over bookings in start order.
    pub fn iter(&self) -> impl Iterator<Item = &StationRange> + '_ {
        self.bookings.iter()
    }

    pub fn as_slice(&self) -> &[StationRange] {
        &self.bookings
    }
}

impl Track for IntervalTrack {
    fn kind(&self) -> TrackKind {
        TrackKind::Interval
    }

    fn is_available(&self, range: StationRange) -> bool {
        IntervalTrack::is_available(self, range)
    }

    fn book(&mut self, range: StationRange) -> bool {
        self.add_booking(range)
    }

    fn bookings(&self) -> Vec<StationRange> {
        self.bookings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: usize, end: usize) -> StationRange {
        StationRange::new(start, end).unwrap()
    }

    fn is_sorted_disjoint(track: &IntervalTrack) -> bool {
        track
            .as_slice()
            .windows(2)
            .all(|w| w[0].end() <= w[1].start())
    }

    #[test]
    fn test_new_track_is_empty() {
        let track = IntervalTrack::new();
        assert!(track.is_empty());
        assert!(!track.has_conflict(r(0, 100)));
    }

    #[test]
    fn test_bookings_are_kept_sorted() {
        let mut track = IntervalTrack::new();
        assert!(track.add_booking(r(7, 9)));
        assert!(track.add_booking(r(0, 3)));
        assert!(track.add_booking(r(4, 6)));
        assert_eq!(track.as_slice(), &[r(0, 3), r(4, 6), r(7, 9)]);
        assert!(is_sorted_disjoint(&track));
    }

    #[test]
    fn test_conflict_rejected_without_mutation() {
        let mut track = IntervalTrack::new();
        assert!(track.add_booking(r(2, 7)));
        let before = track.clone();
        assert!(track.has_conflict(r(5, 8)));
        assert!(!track.add_booking(r(5, 8)));
        assert_eq!(track, before);
    }

    #[test]
    fn test_touching_ranges_do_not_conflict() {
        let mut track = IntervalTrack::new();
        assert!(track.add_booking(r(3, 6)));
        assert!(track.add_booking(r(0, 3)));
        assert!(track.add_booking(r(6, 9)));
        assert_eq!(track.len(), 3);
        assert!(is_sorted_disjoint(&track));
    }

    #[test]
    fn test_contained_and_containing_ranges_conflict() {
        let mut track = IntervalTrack::new();
        track.add_booking(r(2, 8));
        assert!(track.has_conflict(r(3, 4)));
        assert!(track.has_conflict(r(0, 10)));
        assert!(track.has_conflict(r(2, 8)));
    }

    #[test]
    fn test_insert_before_later_start() {
        let mut track = IntervalTrack::new();
        track.add_booking(r(5, 6));
        track.add_booking(r(1, 2));
        track.add_booking(r(3, 5));
        assert_eq!(
            track.iter().copied().collect::<Vec<_>>(),
            vec![r(1, 2), r(3, 5), r(5, 6)]
        );
    }
}
