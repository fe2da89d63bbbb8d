//! Timetable administration: validated create/update/delete of recurring
//! slots. Admin only; everyone else reads the timetable through the
//! calendar or the listing.

use serde::Deserialize;
use uuid::Uuid;

use labtrack_data::provider::DataProvider;
use labtrack_sched::model::{DayOfWeek, TimetableSlot, Viewer};
use labtrack_sched::time::parse_wall_time_range;

use crate::error::{ServiceError, ServiceResult};

/// Incoming slot fields, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotDraft {
    pub course: String,
    pub semester: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub subject_id: String,
    pub subject_name: String,
    pub faculty_id: String,
    pub faculty_name: String,
    pub lab_id: String,
    pub lab_name: Option<String>,
    pub batch: Option<String>,
}

/// ## Summary
/// Creates a recurring slot from a draft.
///
/// ## Errors
/// Returns `Forbidden` for non-admin callers and `Validation` when the
/// weekday is not canonical, a time does not parse as `HH:MM`, or start is
/// not before end.
pub async fn create_slot(
    provider: &dyn DataProvider,
    viewer: &Viewer,
    draft: SlotDraft,
) -> ServiceResult<TimetableSlot> {
    require_admin(viewer)?;
    let slot = validate_draft(Uuid::new_v4().to_string(), draft)?;
    provider.insert_slot(slot.clone()).await?;
    tracing::info!(slot_id = %slot.id, course = %slot.course, semester = %slot.semester, "Slot created");
    Ok(slot)
}

/// ## Summary
/// Replaces an existing slot with re-validated fields.
///
/// ## Errors
/// Returns `Forbidden` for non-admin callers, `Validation` for bad fields
/// and the provider's not-found error for an unknown id.
pub async fn update_slot(
    provider: &dyn DataProvider,
    viewer: &Viewer,
    id: &str,
    draft: SlotDraft,
) -> ServiceResult<TimetableSlot> {
    require_admin(viewer)?;
    let slot = validate_draft(id.to_string(), draft)?;
    provider.update_slot(slot.clone()).await?;
    tracing::info!(slot_id = %slot.id, "Slot updated");
    Ok(slot)
}

/// ## Summary
/// Deletes a slot.
///
/// ## Errors
/// Returns `Forbidden` for non-admin callers and the provider's not-found
/// error for an unknown id.
pub async fn delete_slot(
    provider: &dyn DataProvider,
    viewer: &Viewer,
    id: &str,
) -> ServiceResult<()> {
    require_admin(viewer)?;
    provider.delete_slot(id).await?;
    tracing::info!(slot_id = %id, "Slot deleted");
    Ok(())
}

/// ## Summary
/// Lists slots for an exact (course, semester) pair, blank inputs
/// short-circuiting to an empty list.
///
/// ## Errors
/// Returns an error if the provider fetch fails.
pub async fn list_slots(
    provider: &dyn DataProvider,
    course: &str,
    semester: &str,
) -> ServiceResult<Vec<TimetableSlot>> {
    if course.trim().is_empty() || semester.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(provider.fetch_timetable(course, semester).await?)
}

fn validate_draft(id: String, draft: SlotDraft) -> ServiceResult<TimetableSlot> {
    let day_of_week: DayOfWeek = draft
        .day_of_week
        .parse()
        .map_err(|_| ServiceError::Validation(format!("unknown weekday {:?}", draft.day_of_week)))?;
    parse_wall_time_range(&draft.start_time, &draft.end_time)
        .map_err(|err| ServiceError::Validation(err.to_string()))?;
    if draft.course.trim().is_empty() || draft.semester.trim().is_empty() {
        return Err(ServiceError::Validation(
            "course and semester are required".to_string(),
        ));
    }
    if draft.subject_name.trim().is_empty() {
        return Err(ServiceError::Validation("subject name is required".to_string()));
    }

    Ok(TimetableSlot {
        id,
        course: draft.course,
        semester: draft.semester,
        day_of_week,
        start_time: draft.start_time,
        end_time: draft.end_time,
        subject_id: draft.subject_id,
        subject_name: draft.subject_name,
        faculty_id: draft.faculty_id,
        faculty_name: draft.faculty_name,
        lab_id: draft.lab_id,
        lab_name: draft.lab_name,
        batch: draft.batch.unwrap_or_else(|| "ALL".to_string()),
    })
}

pub(crate) fn require_admin(viewer: &Viewer) -> ServiceResult<()> {
    if viewer.is_admin() {
        Ok(())
    } else {
        Err(ServiceError::Forbidden("administrator role required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SlotDraft {
        SlotDraft {
            course: "BCA".to_string(),
            semester: "S1".to_string(),
            day_of_week: "Monday".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:30".to_string(),
            subject_id: "sub-ds".to_string(),
            subject_name: "Data Structures".to_string(),
            faculty_id: "fac-1".to_string(),
            faculty_name: "A. Menon".to_string(),
            lab_id: "lab-1".to_string(),
            lab_name: Some("Lab 1".to_string()),
            batch: None,
        }
    }

    #[test]
    fn draft_validation_fills_defaults() {
        let slot = validate_draft("slot-1".to_string(), draft()).unwrap();
        assert_eq!(slot.batch, "ALL");
        assert_eq!(slot.day_of_week, DayOfWeek::Monday);
    }

    #[test]
    fn draft_validation_rejects_bad_fields() {
        let mut bad_day = draft();
        bad_day.day_of_week = "Moonday".to_string();
        assert!(matches!(
            validate_draft("slot-1".to_string(), bad_day),
            Err(ServiceError::Validation(_))
        ));

        let mut inverted = draft();
        inverted.start_time = "11:00".to_string();
        inverted.end_time = "09:00".to_string();
        assert!(matches!(
            validate_draft("slot-1".to_string(), inverted),
            Err(ServiceError::Validation(_))
        ));

        let mut bad_time = draft();
        bad_time.end_time = "25:99".to_string();
        assert!(matches!(
            validate_draft("slot-1".to_string(), bad_time),
            Err(ServiceError::Validation(_))
        ));
    }
}
