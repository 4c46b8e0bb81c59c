//! Per-seat occupancy tracks.
//!
//! A [`Track`] records which parts of the line a single seat is booked for.
//! Two representations are provided and are interchangeable behind the trait:
//!
//! - [`SegmentTrack`]: one flag per unit segment. O(line length) memory,
//!   O(range length) queries.
//! - [`IntervalTrack`]: sorted list of booked ranges. O(bookings) memory and
//!   queries.
//!
//! Tracks do not validate ranges against the line; the pool does that before
//! a track is ever reached.

mod interval;
mod segment;

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

pub use interval::IntervalTrack;
pub use segment::SegmentTrack;

use crate::range::StationRange;

/// Occupancy of one seat over the line.
///
/// `book` is all-or-nothing: it either records the whole range and returns
/// `true`, or leaves the track untouched and returns `false`.
pub trait Track: Send + Debug {
    /// Which representation backs this track.
    fn kind(&self) -> TrackKind;

    /// Returns true if no booking overlaps `range`.
    fn is_available(&self, range: StationRange) -> bool;

    /// Books `range` if it is free.
    fn book(&mut self, range: StationRange) -> bool;

    /// Booked ranges in ascending order, for display.
    fn bookings(&self) -> Vec<StationRange>;
}

impl Track for Box<dyn Track> {
    fn kind(&self) -> TrackKind {
        (**self).kind()
    }

    fn is_available(&self, range: StationRange) -> bool {
        (**self).is_available(range)
    }

    fn book(&mut self, range: StationRange) -> bool {
        (**self).book(range)
    }

    fn bookings(&self) -> Vec<StationRange> {
        (**self).bookings()
    }
}

/// Selects a track representation when a pool is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrackKind {
    #[default]
    Segment,
    Interval,
}

impl TrackKind {
    /// Builds an empty track of this kind for a line of `total_stations`.
    pub fn build(self, total_stations: usize) -> Box<dyn Track> {
        match self {
            TrackKind::Segment => Box::new(SegmentTrack::new(total_stations)),
            TrackKind::Interval => Box::new(IntervalTrack::new()),
        }
    }
}

impl Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Segment => f.write_str("segment"),
            TrackKind::Interval => f.write_str("interval"),
        }
    }
}

impl FromStr for TrackKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segment" => Ok(TrackKind::Segment),
            "interval" => Ok(TrackKind::Interval),
            other => Err(format!("unknown track kind: {other}")),
        }
    }
}
