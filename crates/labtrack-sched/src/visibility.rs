//! Per-viewer visibility rules: which bookings a viewer sees and which
//! timetable slots are in scope for their calendar.

use crate::model::{Booking, MASTER_SCHEDULE, MY_CLASS, ViewContext, Viewer};

/// Which timetable slots feed a viewer's calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotScope {
    /// Every catalog course crossed with the leading semesters.
    Master,
    /// Exactly one (course, semester), optionally narrowed to one subject.
    Scoped {
        course: String,
        semester: String,
        subject: Option<String>,
    },
    /// No context resolved; the calendar carries bookings only.
    Empty,
}

impl SlotScope {
    /// ## Summary
    /// Resolves the slot scope for a viewer and their resolved context.
    ///
    /// An administrator without a pinned filter gets the master scope. A
    /// faculty member whose context names a specific subject (anything other
    /// than the "Master Schedule" / "My Class" pseudo-contexts) is narrowed
    /// to slots for that subject. Everyone else with a context sees the
    /// whole (course, semester); no context means no class layer.
    #[must_use]
    pub fn for_viewer(viewer: &Viewer, context: Option<&ViewContext>) -> Self {
        match (viewer, context) {
            (Viewer::Admin { filter: None, .. }, _) => Self::Master,
            (Viewer::Faculty { .. }, Some(ctx)) => Self::Scoped {
                course: ctx.course.clone(),
                semester: ctx.semester.clone(),
                subject: (ctx.name != MASTER_SCHEDULE && ctx.name != MY_CLASS)
                    .then(|| ctx.name.clone()),
            },
            (_, Some(ctx)) => Self::Scoped {
                course: ctx.course.clone(),
                semester: ctx.semester.clone(),
                subject: None,
            },
            (_, None) => Self::Empty,
        }
    }
}

/// ## Summary
/// Decides whether one booking appears on the given viewer's calendar.
///
/// Rejected and cancelled bookings are excluded unconditionally. After
/// that gate the rules are OR'd: administrators see every booking; anyone
/// sees their own; a student sees bookings matching their enrollment
/// (case-insensitive, trimmed); any resolved context admits bookings whose
/// course and semester match it exactly.
#[must_use]
pub fn booking_visible(viewer: &Viewer, context: Option<&ViewContext>, booking: &Booking) -> bool {
    if !booking.status.calendar_visible() {
        return false;
    }

    let in_context = || {
        context.is_some_and(|ctx| ctx.course == booking.course && ctx.semester == booking.semester)
    };

    match viewer {
        Viewer::Admin { .. } => true,
        Viewer::Student {
            id,
            course,
            semester,
        } => {
            *id == booking.user_id
                || (eq_fold(course, &booking.course) && eq_fold(semester, &booking.semester))
                || in_context()
        }
        Viewer::Faculty { id } => *id == booking.user_id || in_context(),
        Viewer::Guest => in_context(),
    }
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
