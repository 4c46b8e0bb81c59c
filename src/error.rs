use thiserror::Error;

use crate::SeatId;

/// Errors reported by pool construction, range validation and seat lookup.
///
/// Booking conflicts are not errors: a rejected booking is an ordinary
/// `false` result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid station range [{start}, {end}) for a line of {total_stations} stations")]
    InvalidRange {
        start: usize,
        end: usize,
        total_stations: usize,
    },

    #[error("Invalid seat number {id}: pool has seats 1..={total_seats}")]
    InvalidSeatId { id: SeatId, total_seats: usize },

    #[error(
        "Invalid pool configuration: {total_stations} stations and {total_seats} seats \
         (need at least 2 stations and 1 seat)"
    )]
    InvalidConfig {
        total_stations: usize,
        total_seats: usize,
    },
}
