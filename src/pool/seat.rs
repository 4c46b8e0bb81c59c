use parking_lot::Mutex;

use crate::range::StationRange;
use crate::track::{Track, TrackKind};
use crate::SeatId;

/// A seat and its exclusively owned track.
///
/// The track sits behind its own lock, so the check-then-set inside
/// [`Track::book`] is serialized per seat while different seats stay
/// independent.
#[derive(Debug)]
pub(crate) struct Seat<T: Track> {
    id: SeatId,
    track: Mutex<T>,
}

impl<T: Track> Seat<T> {
    pub(crate) fn new(id: SeatId, track: T) -> Self {
        Self {
            id,
            track: Mutex::new(track),
        }
    }

    pub(crate) fn id(&self) -> SeatId {
        self.id
    }

    pub(crate) fn kind(&self) -> TrackKind {
        self.track.lock().kind()
    }

    pub(crate) fn is_available(&self, range: StationRange) -> bool {
        self.track.lock().is_available(range)
    }

    pub(crate) fn book(&self, range: StationRange) -> bool {
        self.track.lock().book(range)
    }

    pub(crate) fn snapshot(&self) -> SeatSnapshot {
        let track = self.track.lock();
        SeatSnapshot {
            id: self.id,
            kind: track.kind(),
            bookings: track.bookings(),
        }
    }
}

/// Read-only view of one seat's bookings at the time it was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatSnapshot {
    pub id: SeatId,
    pub kind: TrackKind,
    /// Booked ranges in ascending order. Segment tracks report merged runs.
    pub bookings: Vec<StationRange>,
}

impl SeatSnapshot {
    pub fn is_free(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Total number of booked segments.
    pub fn booked_segments(&self) -> usize {
        self.bookings.iter().map(StationRange::len).sum()
    }
}
