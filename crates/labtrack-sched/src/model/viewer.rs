use serde::{Deserialize, Serialize};

/// Context name used when an administrator pins an explicit filter.
pub const MASTER_SCHEDULE: &str = "Master Schedule";
/// Context name used when a student views their own enrollment.
pub const MY_CLASS: &str = "My Class";

/// Explicit (course, semester) filter an administrator may pin on the
/// calendar. Only the class layer is constrained by it; admins keep full
/// booking visibility either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleFilter {
    pub course: String,
    pub semester: String,
}

/// The resolved (name, course, semester) triple that scopes which classes
/// the current viewer sees.
///
/// Recomputed on every calendar build and never persisted; the "active
/// subject" pointer it may be derived from belongs to the data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewContext {
    pub name: String,
    pub course: String,
    pub semester: String,
}

impl ViewContext {
    #[must_use]
    pub fn master_schedule(filter: &ScheduleFilter) -> Self {
        Self {
            name: MASTER_SCHEDULE.to_string(),
            course: filter.course.clone(),
            semester: filter.semester.clone(),
        }
    }

    #[must_use]
    pub fn my_class(course: &str, semester: &str) -> Self {
        Self {
            name: MY_CLASS.to_string(),
            course: course.to_string(),
            semester: semester.to_string(),
        }
    }
}

/// Who is looking at the calendar.
///
/// Each variant carries exactly the data its visibility rules need; one
/// match on this enum replaces scattered role checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Admin {
        id: String,
        filter: Option<ScheduleFilter>,
    },
    Student {
        id: String,
        course: String,
        semester: String,
    },
    Faculty {
        id: String,
    },
    Guest,
}

impl Viewer {
    /// The viewer's directory id, if they have one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Admin { id, .. } | Self::Student { id, .. } | Self::Faculty { id } => {
                Some(id.as_str())
            }
            Self::Guest => None,
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin { .. })
    }
}
