use serde::{Deserialize, Serialize};

use labtrack_core::types::{RegistrationStatus, Role};
use labtrack_sched::model::Viewer;

/// Directory record for an account.
///
/// Credentials and sessions live with the external identity collaborator;
/// this record carries only what the calendar and the registration review
/// need: the role, the enrollment and the approval status enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Enrollment, present for students.
    pub course: Option<String>,
    pub semester: Option<String>,
    pub registration: RegistrationStatus,
}

impl UserAccount {
    /// ## Summary
    /// Derives the calendar viewer for this account.
    ///
    /// A student record missing enrollment data cannot anchor a class view
    /// and is treated as a guest.
    #[must_use]
    pub fn viewer(&self) -> Viewer {
        match self.role {
            Role::Admin => Viewer::Admin {
                id: self.id.clone(),
                filter: None,
            },
            Role::Faculty => Viewer::Faculty {
                id: self.id.clone(),
            },
            Role::Student => match (&self.course, &self.semester) {
                (Some(course), Some(semester)) => Viewer::Student {
                    id: self.id.clone(),
                    course: course.clone(),
                    semester: semester.clone(),
                },
                _ => {
                    tracing::warn!(user_id = %self.id, "Student record has no enrollment");
                    Viewer::Guest
                }
            },
        }
    }
}
