//! railseat - seat reservation over station ranges
//!
//! A fixed fleet of interchangeable seats is booked against a line of
//! stations. Each seat may hold any number of non-overlapping journeys
//! `[start, end)`; a journey ending at a station never conflicts with one
//! starting there.
//!
//! Two occupancy representations implement the same [`Track`] contract and
//! are selected per pool:
//!
//! - [`SegmentTrack`]: a flag per unit segment between consecutive stations.
//! - [`IntervalTrack`]: a sorted list of booked ranges.
//!
//! ```
//! use railseat::{DynPool, PoolConfig, TrackKind};
//!
//! let config = PoolConfig::new(10, 5).with_track(TrackKind::Interval);
//! let pool = DynPool::from_config(&config).unwrap();
//!
//! assert!(pool.book_seat(1, 0, 3));
//! assert!(pool.book_seat(1, 3, 6));
//! assert_eq!(pool.check_availability(2, 4), vec![2, 3, 4, 5]);
//! ```

pub mod config;
pub mod error;
pub mod pool;
pub mod range;
pub mod track;

pub use config::PoolConfig;
pub use error::BookingError;
pub use pool::{DynPool, IntervalPool, SeatPool, SeatSnapshot, SegmentPool};
pub use range::StationRange;
pub use track::{IntervalTrack, SegmentTrack, Track, TrackKind};

/// Seat number, 1-based and dense within a pool.
pub type SeatId = u32;

/// Identifier type used for pool instances.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
