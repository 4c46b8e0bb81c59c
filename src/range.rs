//! Half-open station ranges.

use std::fmt::Display;

use crate::error::BookingError;

/// Journey `[start, end)` between two stations of a line.
///
/// A range always spans at least one segment (`start < end`). Whether it fits
/// a particular line is checked by [`StationRange::within`]; a line of `n`
/// stations has `n - 1` segments, so the last valid `end` is `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationRange {
    start: usize,
    end: usize,
}

impl StationRange {
    /// Creates `[start, end)`, or `None` when `start >= end`.
    pub const fn new(start: usize, end: usize) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates `[start, end)` and checks it against a line of `total_stations`.
    pub fn within(start: usize, end: usize, total_stations: usize) -> Result<Self, BookingError> {
        let last_station = total_stations.saturating_sub(1);
        match Self::new(start, end) {
            Some(range) if end <= last_station => Ok(range),
            _ => Err(BookingError::InvalidRange {
                start,
                end,
                total_stations,
            }),
        }
    }

    /// Single segment `[index, index + 1)`.
    pub const fn segment(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of unit segments covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if station `position` lies in `[start, end)`.
    pub const fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    /// Half-open overlap test. Ranges that only touch (`[a, b)` and `[b, c)`)
    /// do not overlap.
    pub const fn overlaps(&self, other: &StationRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Segment indices covered by this range.
    pub fn segments(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl Display for StationRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Station {} → Station {}", self.start, self.end)
    }
}

// =============================================================================
// StationRange Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for StationRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("StationRange", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StationRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: usize,
            end: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "station range start {} must be before end {}",
                raw.start, raw.end
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: usize, end: usize) -> StationRange {
        StationRange::new(start, end).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_and_reversed() {
        assert!(StationRange::new(3, 3).is_none());
        assert!(StationRange::new(5, 2).is_none());
        assert_eq!(r(2, 5).len(), 3);
    }

    #[test]
    fn test_within_uses_segment_bound() {
        assert_eq!(StationRange::within(0, 9, 10), Ok(r(0, 9)));
        assert_eq!(
            StationRange::within(0, 10, 10),
            Err(BookingError::InvalidRange {
                start: 0,
                end: 10,
                total_stations: 10
            })
        );
        assert!(StationRange::within(4, 4, 10).is_err());
        assert!(StationRange::within(0, 1, 0).is_err());
    }

    #[test]
    fn test_overlaps_half_open() {
        assert!(r(0, 5).overlaps(&r(4, 8)));
        assert!(r(4, 8).overlaps(&r(0, 5)));
        assert!(r(2, 7).overlaps(&r(3, 4)));
        assert!(!r(0, 3).overlaps(&r(3, 6)));
        assert!(!r(3, 6).overlaps(&r(0, 3)));
    }

    #[test]
    fn test_contains() {
        let range = r(2, 5);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert!(!range.contains(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(r(3, 6).to_string(), "Station 3 → Station 6");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_reversed_range() {
        let json = serde_json::to_string(&r(1, 4)).unwrap();
        assert_eq!(json, r#"{"start":1,"end":4}"#);
        let back: StationRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r(1, 4));
        assert!(serde_json::from_str::<StationRange>(r#"{"start":4,"end":4}"#).is_err());
    }
}
