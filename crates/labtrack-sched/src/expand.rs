//! Expands weekly recurring timetable slots into dated CLASS events.

use chrono::{Datelike, NaiveDate};

use crate::error::SchedResult;
use crate::model::{BookingStatus, CalendarEvent, DayOfWeek, EventKind, TimetableSlot};
use crate::time::{days_in_month, parse_wall_time};

/// Location placeholder when a slot has no lab name recorded.
const UNASSIGNED_LAB: &str = "Lab";

/// ## Summary
/// Produces one CLASS event per (slot, calendar day) pair where the day
/// falls in the month containing `reference` and its weekday matches the
/// slot's `day_of_week`.
///
/// Occurrence ids are `{slot_id}-{day:02}`: unique within the month and
/// deterministic across rebuilds. A slot whose `HH:MM` strings do not parse
/// is logged and skipped so one bad record cannot blank the calendar.
/// Overlapping slots are expanded as-is; this is not a conflict checker.
///
/// Output order is unspecified; the merge step imposes ordering.
#[must_use]
pub fn expand_month(slots: &[TimetableSlot], reference: NaiveDate) -> Vec<CalendarEvent> {
    let year = reference.year();
    let month = reference.month();
    let days = days_in_month(reference);

    let mut events = Vec::new();
    for day in 1..=days {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let weekday = DayOfWeek::from(date.weekday());
        for slot in slots.iter().filter(|slot| slot.day_of_week == weekday) {
            match occurrence(slot, date, day) {
                Ok(event) => events.push(event),
                Err(error) => {
                    tracing::warn!(
                        slot_id = %slot.id,
                        subject = %slot.subject_name,
                        %error,
                        "Skipping slot with malformed time"
                    );
                }
            }
        }
    }

    tracing::debug!(
        year,
        month,
        slot_count = slots.len(),
        event_count = events.len(),
        "Expanded timetable month"
    );
    events
}

fn occurrence(slot: &TimetableSlot, date: NaiveDate, day: u32) -> SchedResult<CalendarEvent> {
    let start = parse_wall_time(&slot.start_time)?;
    let end = parse_wall_time(&slot.end_time)?;

    Ok(CalendarEvent {
        id: format!("{}-{day:02}", slot.id),
        summary: slot.subject_name.clone(),
        description: format!("Class taken by {}", slot.faculty_name),
        location: slot
            .lab_name
            .clone()
            .unwrap_or_else(|| UNASSIGNED_LAB.to_string()),
        start: date.and_time(start),
        end: date.and_time(end),
        // Recurring classes are never pending.
        status: BookingStatus::Approved,
        kind: EventKind::Class,
    })
}
