//! Construction parameters for seat pools.

use crate::error::BookingError;
use crate::track::TrackKind;

/// Configuration of a [`SeatPool`](crate::pool::SeatPool).
///
/// Stations are numbered `0..total_stations`; seats are numbered
/// `1..=total_seats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    /// Number of stations on the line (at least 2).
    pub total_stations: usize,
    /// Number of seats in the pool (at least 1).
    pub total_seats: usize,
    /// Occupancy representation used for every seat.
    #[cfg_attr(feature = "serde", serde(default))]
    pub track: TrackKind,
}

impl PoolConfig {
    pub fn new(total_stations: usize, total_seats: usize) -> Self {
        Self {
            total_stations,
            total_seats,
            track: TrackKind::default(),
        }
    }

    pub fn with_track(mut self, track: TrackKind) -> Self {
        self.track = track;
        self
    }

    pub fn with_stations(mut self, total_stations: usize) -> Self {
        self.total_stations = total_stations;
        self
    }

    pub fn with_seats(mut self, total_seats: usize) -> Self {
        self.total_seats = total_seats;
        self
    }

    /// Number of unit segments on the line.
    pub fn segments(&self) -> usize {
        self.total_stations.saturating_sub(1)
    }

    /// Checks the minimum line and fleet size.
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.total_stations < 2 || self.total_seats < 1 {
            return Err(BookingError::InvalidConfig {
                total_stations: self.total_stations,
                total_seats: self.total_seats,
            });
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            total_stations: 10,
            total_seats: 5,
            track: TrackKind::Segment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = PoolConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.segments(), 9);
        assert_eq!(cfg.track, TrackKind::Segment);
    }

    #[test]
    fn builder_overrides_fields() {
        let cfg = PoolConfig::new(4, 2)
            .with_track(TrackKind::Interval)
            .with_seats(3)
            .with_stations(6);
        assert_eq!(cfg.total_stations, 6);
        assert_eq!(cfg.total_seats, 3);
        assert_eq!(cfg.track, TrackKind::Interval);
    }

    #[test]
    fn too_small_line_or_fleet_is_rejected() {
        assert!(PoolConfig::new(1, 5).validate().is_err());
        assert!(PoolConfig::new(10, 0).validate().is_err());
        assert!(PoolConfig::new(2, 1).validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_default_track() {
        let cfg: PoolConfig =
            serde_json::from_str(r#"{"total_stations": 8, "total_seats": 3}"#).unwrap();
        assert_eq!(cfg, PoolConfig::new(8, 3));

        let cfg: PoolConfig = serde_json::from_str(
            r#"{"total_stations": 8, "total_seats": 3, "track": "interval"}"#,
        )
        .unwrap();
        assert_eq!(cfg.track, TrackKind::Interval);
    }
}
