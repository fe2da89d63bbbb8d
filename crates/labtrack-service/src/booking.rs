//! Booking intake and status flips.
//!
//! New bookings always start pending; the approval review that moves them
//! onward lives outside this service, which only flips the status enum on
//! an administrator's or owner's request.

use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;

use labtrack_core::types::Role;
use labtrack_data::model::UserAccount;
use labtrack_data::provider::DataProvider;
use labtrack_sched::model::{Booking, BookingStatus, Viewer};

use crate::error::{ServiceError, ServiceResult};
use crate::timetable::require_admin;

/// Incoming booking fields, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingDraft {
    pub subject: String,
    pub course: String,
    pub semester: String,
    pub lab_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// ## Summary
/// Creates a pending booking for a faculty member or administrator.
///
/// Overlapping reservations are accepted as-is: there is no conflict
/// rejection between bookings or against the recurring timetable.
///
/// ## Errors
/// Returns `Forbidden` for students, `Validation` for an inverted time
/// range or blank subject, and `NotFound` for an unknown lab.
pub async fn create_booking(
    provider: &dyn DataProvider,
    requester: &UserAccount,
    draft: BookingDraft,
) -> ServiceResult<Booking> {
    if !matches!(requester.role, Role::Faculty | Role::Admin) {
        return Err(ServiceError::Forbidden(
            "faculty or administrator role required",
        ));
    }
    if draft.subject.trim().is_empty() {
        return Err(ServiceError::Validation("subject is required".to_string()));
    }
    if draft.start >= draft.end {
        return Err(ServiceError::Validation(
            "booking must start before it ends".to_string(),
        ));
    }
    if provider.fetch_lab(&draft.lab_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("lab {}", draft.lab_id)));
    }

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        user_id: requester.id.clone(),
        user_name: requester.name.clone(),
        subject: draft.subject,
        course: draft.course,
        semester: draft.semester,
        lab_id: draft.lab_id,
        start: draft.start,
        end: draft.end,
        status: BookingStatus::Pending,
    };
    provider.insert_booking(booking.clone()).await?;
    tracing::info!(booking_id = %booking.id, user_id = %booking.user_id, "Booking created");
    Ok(booking)
}

/// ## Summary
/// Cancels a booking. Owners may cancel their own; administrators may
/// cancel any.
///
/// ## Errors
/// Returns `NotFound` for an unknown id and `Forbidden` when the caller
/// is neither the owner nor an administrator.
pub async fn cancel_booking(
    provider: &dyn DataProvider,
    viewer: &Viewer,
    id: &str,
) -> ServiceResult<Booking> {
    let booking = provider
        .fetch_booking(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("booking {id}")))?;

    let owns = viewer.id().is_some_and(|vid| vid == booking.user_id);
    if !owns && !viewer.is_admin() {
        return Err(ServiceError::Forbidden("not the booking owner"));
    }

    let cancelled = provider
        .update_booking_status(id, BookingStatus::Cancelled)
        .await?;
    tracing::info!(booking_id = %id, "Booking cancelled");
    Ok(cancelled)
}

/// ## Summary
/// Sets a booking's status. Administrator only; this flips the enum and
/// nothing else.
///
/// ## Errors
/// Returns `Forbidden` for non-admin callers and `NotFound` for an
/// unknown id.
pub async fn set_booking_status(
    provider: &dyn DataProvider,
    viewer: &Viewer,
    id: &str,
    status: BookingStatus,
) -> ServiceResult<Booking> {
    require_admin(viewer)?;
    let updated = provider.update_booking_status(id, status).await?;
    tracing::info!(booking_id = %id, status = %status, "Booking status set");
    Ok(updated)
}

/// ## Summary
/// Lists bookings for the management view: administrators see every
/// booking, everyone else sees only their own.
///
/// ## Errors
/// Returns an error if the provider fetch fails.
pub async fn list_bookings(
    provider: &dyn DataProvider,
    viewer: &Viewer,
) -> ServiceResult<Vec<Booking>> {
    let mut bookings = provider.fetch_all_bookings().await?;
    if !viewer.is_admin() {
        let viewer_id = viewer.id().unwrap_or_default();
        bookings.retain(|booking| booking.user_id == viewer_id);
    }
    bookings.sort_by_key(|booking| booking.start);
    Ok(bookings)
}
