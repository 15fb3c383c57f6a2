use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const SLOT_FORMAT: &str = "%H:%M";

/// One fixed value from the daily schedule ("09:00" .. "22:00").
/// A booking occupies exactly one slot; there are no variable-length
/// time ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// The slot one hour later. Only informational: occupancy is always
    /// a single fixed-duration slot.
    pub fn following(self) -> TimeSlot {
        TimeSlot(self.0 + Duration::hours(1))
    }
}

impl From<NaiveTime> for TimeSlot {
    fn from(value: NaiveTime) -> Self {
        Self(value)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid time slot: {0}")]
pub struct ParseTimeSlotError(String);

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, SLOT_FORMAT)
            .map(TimeSlot)
            .map_err(|_| ParseTimeSlotError(s.to_string()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_wall_clock_times() -> anyhow::Result<()> {
        let slot: TimeSlot = "09:00".parse()?;
        assert_eq!(slot.to_string(), "09:00");

        let slot: TimeSlot = "22:00".parse()?;
        assert_eq!(slot.following().to_string(), "23:00");
        Ok(())
    }

    #[test]
    fn rejects_malformed_times() {
        assert!("25:00".parse::<TimeSlot>().is_err());
        assert!("10am".parse::<TimeSlot>().is_err());
        assert!("".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn serializes_as_display_string() -> anyhow::Result<()> {
        let slot: TimeSlot = "15:00".parse()?;
        assert_eq!(serde_json::to_string(&slot)?, r#""15:00""#);

        let back: TimeSlot = serde_json::from_str(r#""15:00""#)?;
        assert_eq!(back, slot);
        Ok(())
    }
}
