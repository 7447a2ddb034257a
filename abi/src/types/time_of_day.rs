use core::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::BookingError;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A minute-resolution time of day, stored as minutes since midnight.
///
/// The ordering is the same order the wire strings would give (zero-padded
/// `HH:MM` compares lexicographically in time order), but made explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn new(hour: u16, minute: u16) -> Result<Self, BookingError> {
        if hour >= 24 || minute >= 60 {
            return Err(BookingError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn from_minutes(minutes: u16) -> Result<Self, BookingError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(BookingError::InvalidTime(format!("minute {}", minutes)));
        }
        Ok(Self(minutes))
    }

    // Grid construction only; callers guarantee the range.
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Whole minutes from `self` to `later`, zero if `later` is not later.
    pub fn minutes_until(&self, later: TimeOfDay) -> u16 {
        later.0.saturating_sub(self.0)
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    /// Accepts `HH:MM` and `HH:MM:SS` (the latter is how `LocalTime`-style
    /// backends serialize); seconds are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let hour = parts.next().and_then(|p| p.parse::<u16>().ok());
        let minute = parts.next().and_then(|p| p.parse::<u16>().ok());

        match (hour, minute) {
            (Some(h), Some(m)) => TimeOfDay::new(h, m),
            _ => Err(BookingError::InvalidTime(s.to_string())),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t.minutes(), 9 * 60 + 30);
        assert_eq!(t.to_string(), "09:30");
    }

    #[test]
    fn parse_accepts_seconds_suffix() {
        let t: TimeOfDay = "14:00:00".parse().unwrap();
        assert_eq!(t.to_string(), "14:00");
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn ordering_matches_wall_clock() {
        let a: TimeOfDay = "08:00".parse().unwrap();
        let b: TimeOfDay = "20:00".parse().unwrap();
        assert!(a < b);
        assert_eq!(a.minutes_until(b), 12 * 60);
        assert_eq!(b.minutes_until(a), 0);
    }
}
