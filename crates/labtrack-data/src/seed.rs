//! JSON seed for the in-memory provider.

use std::path::Path;

use serde::Deserialize;

use labtrack_sched::model::{Booking, TimetableSlot, ViewContext};

use crate::error::DataResult;
use crate::model::{Broadcast, Lab, SharedResource, UserAccount};

/// Initial dataset loaded at startup when `data.seed_path` is configured.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<UserAccount>,
    #[serde(default)]
    pub labs: Vec<Lab>,
    #[serde(default)]
    pub slots: Vec<TimetableSlot>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub resources: Vec<SharedResource>,
    #[serde(default)]
    pub broadcasts: Vec<Broadcast>,
    #[serde(default)]
    pub active_subject: Option<ViewContext>,
}

impl Seed {
    /// ## Summary
    /// Reads and parses a seed file.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or is not valid seed JSON.
    pub fn from_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_seed_parses() {
        let seed: Seed = serde_json::from_str(
            r#"{
                "labs": [{"id": "lab-1", "name": "Lab 1", "capacity": 30}],
                "active_subject": {
                    "name": "Data Structures",
                    "course": "BCA",
                    "semester": "S1"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(seed.labs.len(), 1);
        assert!(seed.users.is_empty());
        assert_eq!(
            seed.active_subject.map(|ctx| ctx.name),
            Some("Data Structures".to_string())
        );
    }
}
