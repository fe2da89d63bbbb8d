use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pointer record for a shared study resource.
///
/// The file itself lives on the external CDN; only the metadata and the
/// delivery URL are recorded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedResource {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub url: String,
    pub uploader_id: String,
    pub uploaded_at: DateTime<Utc>,
}
