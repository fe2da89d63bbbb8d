use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::SchedError;

/// Canonical weekday names as they appear on timetable records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            other => Err(SchedError::InvalidDayOfWeek(other.to_string())),
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// A recurring weekly timetable entry.
///
/// Slots are created and edited only through timetable administration and
/// recur indefinitely; there is no per-term validity window on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub id: String,
    pub course: String,
    pub semester: String,
    pub day_of_week: DayOfWeek,
    /// 24h `HH:MM` wall-clock, strictly before `end_time` within the day.
    pub start_time: String,
    pub end_time: String,
    pub subject_id: String,
    pub subject_name: String,
    pub faculty_id: String,
    pub faculty_name: String,
    pub lab_id: String,
    pub lab_name: Option<String>,
    /// Cohort tag; "ALL" when the slot applies to the whole class.
    #[serde(default = "default_batch")]
    pub batch: String,
}

fn default_batch() -> String {
    "ALL".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_of_week_parses_canonical_names() {
        assert_eq!("Monday".parse::<DayOfWeek>().ok(), Some(DayOfWeek::Monday));
        assert_eq!(
            "saturday".parse::<DayOfWeek>().ok(),
            Some(DayOfWeek::Saturday)
        );
        assert!("Mon".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn batch_defaults_to_all() {
        let slot: TimetableSlot = serde_json::from_str(
            r#"{
                "id": "slot-1",
                "course": "BCA",
                "semester": "S1",
                "day_of_week": "Monday",
                "start_time": "09:00",
                "end_time": "10:00",
                "subject_id": "sub-1",
                "subject_name": "Data Structures",
                "faculty_id": "fac-1",
                "faculty_name": "A. Menon",
                "lab_id": "lab-1",
                "lab_name": "Lab 1"
            }"#,
        )
        .unwrap();
        assert_eq!(slot.batch, "ALL");
    }
}
