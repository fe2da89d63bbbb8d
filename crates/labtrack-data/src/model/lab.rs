use serde::{Deserialize, Serialize};

/// A bookable lab room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    pub id: String,
    pub name: String,
    pub capacity: u32,
}
