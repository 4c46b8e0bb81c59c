use log::{debug, info, warn};

use crate::config::PoolConfig;
use crate::error::BookingError;
use crate::range::StationRange;
use crate::track::{IntervalTrack, SegmentTrack, Track, TrackKind};
use crate::{Id, SeatId};

mod seat;

use seat::Seat;
pub use seat::SeatSnapshot;


/// Pool whose seats use the dense segment representation.
pub type SegmentPool = SeatPool<SegmentTrack>;
/// Pool whose seats use the sorted booking-list representation.
pub type IntervalPool = SeatPool<IntervalTrack>;
/// Pool whose representation is picked at runtime from a [`PoolConfig`].
pub type DynPool = SeatPool<Box<dyn Track>>;

/// Fixed fleet of seats sharing one line of stations.
///
/// Seats are numbered `1..=total_seats`; seat `n` lives at index `n - 1`.
/// Every seat uses the same track representation `T`.
///
/// All operations take `&self`. Each seat is locked on its own, so a pool can
/// be shared between threads. [`check_availability`](Self::check_availability)
/// visits the seats one after another and may observe bookings that commit
/// mid-scan; treat it as a hint and rely on [`book_seat`](Self::book_seat) for
/// the authoritative answer.
///
/// # Ranges
///
/// A line of `n` stations has `n - 1` segments. A range `[start, end)` is
/// valid when `start < end <= n - 1`.
///
/// # Examples
///
/// ```
/// use railseat::pool::SegmentPool;
///
/// let pool = SegmentPool::new(10, 5).unwrap();
/// assert!(pool.book_seat(1, 0, 3));
/// assert!(pool.book_seat(2, 2, 7));
///
/// assert_eq!(pool.check_availability(3, 6), vec![1, 3, 4, 5]);
/// assert!(!pool.book_seat(2, 5, 8));
///
/// // Invalid requests are reported and come back empty / false.
/// assert!(pool.check_availability(6, 3).is_empty());
/// assert!(!pool.book_seat(9, 0, 1));
/// ```
#[derive(Debug)]
pub struct SeatPool<T: Track> {
    id: Id,
    total_stations: usize,
    seats: Vec<Seat<T>>,
}

impl SeatPool<SegmentTrack> {
    pub fn new(total_stations: usize, total_seats: usize) -> Result<Self, BookingError> {
        Self::with_tracks(total_stations, total_seats, SegmentTrack::new)
    }
}

impl SeatPool<IntervalTrack> {
    pub fn new(total_stations: usize, total_seats: usize) -> Result<Self, BookingError> {
        Self::with_tracks(total_stations, total_seats, |_| IntervalTrack::new())
    }
}

impl SeatPool<Box<dyn Track>> {
    /// Builds a pool with the representation named in `config`.
    pub fn from_config(config: &PoolConfig) -> Result<Self, BookingError> {
        let kind = config.track;
        Self::with_tracks(config.total_stations, config.total_seats, |stations| {
            kind.build(stations)
        })
    }
}

impl<T: Track> SeatPool<T> {
    /// Builds a pool, creating one fresh track per seat with `make_track`.
    ///
    /// `make_track` receives the number of stations on the line and must
    /// build a track covering all of it.
    pub(crate) fn with_tracks<F>(
        total_stations: usize,
        total_seats: usize,
        mut make_track: F,
    ) -> Result<Self, BookingError>
    where
        F: FnMut(usize) -> T,
    {
        let invalid = BookingError::InvalidConfig {
            total_stations,
            total_seats,
        };
        PoolConfig::new(total_stations, total_seats).validate()?;
        let last_id = SeatId::try_from(total_seats).map_err(|_| invalid)?;

        let seats: Vec<Seat<T>> = (1..=last_id)
            .map(|id| Seat::new(id, make_track(total_stations)))
            .collect();

        let pool = Self {
            id: crate::generate_id(),
            total_stations,
            seats,
        };
        debug!(
            "Created {} pool {} with {} seats over {} stations",
            pool.kind(),
            pool.id,
            total_seats,
            total_stations
        );
        Ok(pool)
    }

    /// Unique identifier of this pool instance.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn total_stations(&self) -> usize {
        self.total_stations
    }

    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }

    /// Track representation shared by every seat.
    pub fn kind(&self) -> TrackKind {
        self.seats.first().map(Seat::kind).unwrap_or_default()
    }

    /// Seat numbers in ascending order.
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.seats.iter().map(Seat::id)
    }

    fn range(&self, start: usize, end: usize) -> Result<StationRange, BookingError> {
        StationRange::within(start, end, self.total_stations)
    }

    fn seat(&self, id: SeatId) -> Result<&Seat<T>, BookingError> {
        (id as usize)
            .checked_sub(1)
            .and_then(|index| self.seats.get(index))
            .ok_or(BookingError::InvalidSeatId {
                id,
                total_seats: self.seats.len(),
            })
    }

    /// Seats free for the whole of `[start, end)`, in ascending order.
    pub fn try_check_availability(
        &self,
        start: usize,
        end: usize,
    ) -> Result<Vec<SeatId>, BookingError> {
        let range = self.range(start, end)?;
        Ok(self
            .seats
            .iter()
            .filter(|seat| seat.is_available(range))
            .map(Seat::id)
            .collect())
    }

    /// Like [`try_check_availability`](Self::try_check_availability), but an
    /// invalid range is logged and yields no seats.
    pub fn check_availability(&self, start: usize, end: usize) -> Vec<SeatId> {
        self.try_check_availability(start, end).unwrap_or_else(|err| {
            warn!("pool {}: {}", self.id, err);
            Vec::new()
        })
    }

    /// Lowest-numbered seat free for `[start, end)`.
    pub fn first_available(&self, start: usize, end: usize) -> Option<SeatId> {
        let range = self
            .range(start, end)
            .map_err(|err| warn!("pool {}: {}", self.id, err))
            .ok()?;
        self.seats
            .iter()
            .find(|seat| seat.is_available(range))
            .map(Seat::id)
    }

    /// Books `[start, end)` on seat `id`.
    ///
    /// Returns `Ok(false)` when the seat already holds an overlapping
    /// booking; the seat is left unchanged in that case.
    pub fn try_book_seat(
        &self,
        id: SeatId,
        start: usize,
        end: usize,
    ) -> Result<bool, BookingError> {
        let seat = self.seat(id)?;
        let range = self.range(start, end)?;
        let booked = seat.book(range);
        if booked {
            info!("Seat {} booked from Station {} to Station {}", id, start, end);
        } else {
            debug!(
                "Seat {} not available from Station {} to Station {}",
                id, start, end
            );
        }
        Ok(booked)
    }

    /// Like [`try_book_seat`](Self::try_book_seat), but an invalid seat or
    /// range is logged and reported as `false`.
    pub fn book_seat(&self, id: SeatId, start: usize, end: usize) -> bool {
        self.try_book_seat(id, start, end).unwrap_or_else(|err| {
            warn!("pool {}: {}", self.id, err);
            false
        })
    }

    /// Books the lowest-numbered seat that accepts `[start, end)`.
    ///
    /// Seats are tried in order under their own locks, so a seat taken by a
    /// concurrent caller between query and booking is simply skipped.
    pub fn book_first_available(&self, start: usize, end: usize) -> Option<SeatId> {
        let range = self
            .range(start, end)
            .map_err(|err| warn!("pool {}: {}", self.id, err))
            .ok()?;
        let seat = self.seats.iter().find(|seat| seat.book(range))?;
        info!(
            "Seat {} booked from Station {} to Station {}",
            seat.id(),
            start,
            end
        );
        Some(seat.id())
    }

    /// Current bookings of seat `id`, if it exists.
    pub fn seat_snapshot(&self, id: SeatId) -> Option<SeatSnapshot> {
        self.seat(id).ok().map(Seat::snapshot)
    }

    /// Current bookings of every seat in ascending seat order.
    pub fn snapshot(&self) -> Vec<SeatSnapshot> {
        self.seats.iter().map(Seat::snapshot).collect()
    }
}
