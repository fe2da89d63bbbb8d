//! Builds the unified calendar: ad-hoc bookings merged with the recurring
//! timetable expanded for the reference month, scoped to the viewer.

use chrono::NaiveDate;
use futures::future::try_join_all;

use labtrack_core::catalog::{COURSES, master_view_semesters};
use labtrack_data::provider::DataProvider;
use labtrack_sched::expand::expand_month;
use labtrack_sched::model::{Booking, CalendarEvent, TimetableSlot, ViewContext, Viewer};
use labtrack_sched::visibility::{SlotScope, booking_visible};

use crate::error::ServiceResult;

/// ## Summary
/// Builds the merged, chronologically ordered event list for one viewer
/// and one reference month.
///
/// The booking fetch and the slot fetches run concurrently and are joined
/// before merging; if any fetch fails the whole build fails, never a
/// partial calendar. The computation is pure given the provider snapshot,
/// so identical inputs yield an identical event set.
///
/// ## Errors
/// Returns an error if any provider fetch fails.
pub async fn build_calendar(
    provider: &dyn DataProvider,
    viewer: &Viewer,
    reference: NaiveDate,
) -> ServiceResult<Vec<CalendarEvent>> {
    let context = resolve_context(provider, viewer).await?;
    let scope = SlotScope::for_viewer(viewer, context.as_ref());

    tracing::debug!(?scope, context = ?context, "Building calendar");

    let (bookings, slots) = tokio::try_join!(
        fetch_bookings(provider),
        fetch_scoped_slots(provider, &scope),
    )?;

    let mut events: Vec<CalendarEvent> = bookings
        .iter()
        .filter(|booking| booking_visible(viewer, context.as_ref(), booking))
        .map(CalendarEvent::from)
        .collect();
    events.extend(expand_month(&slots, reference));
    events.sort_by_key(|event| event.start);

    tracing::debug!(event_count = events.len(), "Calendar built");
    Ok(events)
}

/// ## Summary
/// Resolves whose schedule is being viewed.
///
/// An admin filter pins the "Master Schedule" context; a student is always
/// anchored to "My Class"; faculty and guests fall back to the externally
/// persisted active-subject pointer, which may be absent.
///
/// ## Errors
/// Returns an error if the active-subject lookup fails.
pub async fn resolve_context(
    provider: &dyn DataProvider,
    viewer: &Viewer,
) -> ServiceResult<Option<ViewContext>> {
    match viewer {
        Viewer::Admin {
            filter: Some(filter),
            ..
        } => Ok(Some(ViewContext::master_schedule(filter))),
        Viewer::Admin { filter: None, .. } => Ok(None),
        Viewer::Student {
            course, semester, ..
        } => Ok(Some(ViewContext::my_class(course, semester))),
        Viewer::Faculty { .. } | Viewer::Guest => {
            Ok(provider.resolve_active_subject_context().await?)
        }
    }
}

async fn fetch_bookings(provider: &dyn DataProvider) -> ServiceResult<Vec<Booking>> {
    Ok(provider.fetch_all_bookings().await?)
}

async fn fetch_scoped_slots(
    provider: &dyn DataProvider,
    scope: &SlotScope,
) -> ServiceResult<Vec<TimetableSlot>> {
    match scope {
        SlotScope::Empty => Ok(Vec::new()),
        SlotScope::Master => {
            let pairs: Vec<(&str, &str)> = COURSES
                .iter()
                .flat_map(|course| {
                    master_view_semesters()
                        .iter()
                        .map(move |semester| (*course, *semester))
                })
                .collect();
            let fetched = try_join_all(
                pairs
                    .into_iter()
                    .map(|(course, semester)| fetch_timetable(provider, course, semester)),
            )
            .await?;
            Ok(fetched.into_iter().flatten().collect())
        }
        SlotScope::Scoped {
            course,
            semester,
            subject,
        } => {
            let mut slots = fetch_timetable(provider, course, semester).await?;
            if let Some(subject) = subject {
                slots.retain(|slot| slot.subject_name.eq_ignore_ascii_case(subject));
            }
            Ok(slots)
        }
    }
}

/// Blank course or semester short-circuits to an empty result without
/// touching the provider.
async fn fetch_timetable(
    provider: &dyn DataProvider,
    course: &str,
    semester: &str,
) -> ServiceResult<Vec<TimetableSlot>> {
    if course.trim().is_empty() || semester.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(provider.fetch_timetable(course, semester).await?)
}
