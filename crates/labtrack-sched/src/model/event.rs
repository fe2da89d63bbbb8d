use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::booking::{Booking, BookingStatus};

/// What a calendar event was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Booking,
    Class,
}

/// Presentation accent for an event, a pure function of (kind, status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Class,
    Pending,
    Approved,
    Default,
}

impl Accent {
    /// Display colour name the UI layer maps to its palette.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "purple",
            Self::Pending => "orange",
            Self::Approved => "green",
            Self::Default => "blue",
        }
    }
}

/// One entry on the unified calendar.
///
/// Events are derived per query and never persisted. Expanded class
/// occurrences carry a synthetic id of the form `{slot_id}-{day:02}`,
/// deterministic across rebuilds so identical inputs yield identical ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub kind: EventKind,
}

impl CalendarEvent {
    #[must_use]
    pub const fn accent(&self) -> Accent {
        match (self.kind, self.status) {
            (EventKind::Class, _) => Accent::Class,
            (EventKind::Booking, BookingStatus::Pending) => Accent::Pending,
            (EventKind::Booking, BookingStatus::Approved) => Accent::Approved,
            (EventKind::Booking, _) => Accent::Default,
        }
    }
}

impl From<&Booking> for CalendarEvent {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.clone(),
            summary: booking.subject.clone(),
            description: format!("Booked by {}", booking.user_name),
            location: booking.lab_id.clone(),
            start: booking.start,
            end: booking.end,
            status: booking.status,
            kind: EventKind::Booking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(kind: EventKind, status: BookingStatus) -> CalendarEvent {
        let start = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        CalendarEvent {
            id: "e1".to_string(),
            summary: "Networks".to_string(),
            description: String::new(),
            location: "Lab 2".to_string(),
            start,
            end: start + chrono::TimeDelta::hours(1),
            status,
            kind,
        }
    }

    #[test]
    fn accent_follows_kind_then_status() {
        assert_eq!(
            event(EventKind::Class, BookingStatus::Approved).accent(),
            Accent::Class
        );
        assert_eq!(
            event(EventKind::Booking, BookingStatus::Pending).accent(),
            Accent::Pending
        );
        assert_eq!(
            event(EventKind::Booking, BookingStatus::Approved).accent(),
            Accent::Approved
        );
        assert_eq!(
            event(EventKind::Booking, BookingStatus::Cancelled).accent(),
            Accent::Default
        );
    }
}
