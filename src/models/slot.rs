//! Weekly time slot model.
//!
//! A slot is a fixed weekly interval: a day-of-week tag plus wall-clock
//! start and end times at minute precision. Slots are configuration data;
//! the engine never creates or deletes them.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::Day;

/// A fixed weekly time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot identifier.
    pub id: String,
    /// Day of week.
    pub day: Day,
    /// Wall-clock start time.
    pub start_time: NaiveTime,
    /// Wall-clock end time. Expected to be after `start_time`.
    pub end_time: NaiveTime,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(id: impl Into<String>, day: Day, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id: id.into(),
            day,
            start_time,
            end_time,
        }
    }

    /// Slot length in minutes. Negative if the times are inverted.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_slot_duration() {
        let slot = Slot::new("s1", Day::Mon, t(9, 0), t(10, 30));
        assert_eq!(slot.duration_minutes(), 90);
    }

    #[test]
    fn test_inverted_times_negative_duration() {
        let slot = Slot::new("s2", Day::Tue, t(14, 0), t(13, 0));
        assert_eq!(slot.duration_minutes(), -60);
    }

    #[test]
    fn test_serde_roundtrip() {
        let slot = Slot::new("s3", Day::Wed, t(13, 0), t(14, 0));
        let json = serde_json::to_string(&slot).unwrap();
        let back: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }
}
