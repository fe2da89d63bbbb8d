use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use labtrack_core::types::Role;

/// Who a broadcast is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    All,
    Students,
    Faculty,
}

impl Audience {
    /// ## Summary
    /// Whether a reader with `role` is part of this audience.
    /// Administrators read every broadcast.
    #[must_use]
    pub const fn includes(self, role: Role) -> bool {
        match (self, role) {
            (Self::All, _) | (_, Role::Admin) => true,
            (Self::Students, Role::Student) | (Self::Faculty, Role::Faculty) => true,
            _ => false,
        }
    }
}

/// An administrative broadcast notification record.
///
/// Composition only; the delivery transport is an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    pub id: String,
    pub title: String,
    pub message: String,
    pub audience: Audience,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
