//! Broadcast composition. Records only; delivery is an external concern.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use labtrack_core::types::Role;
use labtrack_data::model::{Audience, Broadcast, UserAccount};
use labtrack_data::provider::DataProvider;

use crate::error::{ServiceError, ServiceResult};

/// Incoming broadcast fields, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastDraft {
    pub title: String,
    pub message: String,
    pub audience: Audience,
}

/// ## Summary
/// Composes and records a broadcast. Administrator only.
///
/// ## Errors
/// Returns `Forbidden` for non-admin callers and `Validation` for a blank
/// title or message.
pub async fn publish_broadcast(
    provider: &dyn DataProvider,
    requester: &UserAccount,
    draft: BroadcastDraft,
) -> ServiceResult<Broadcast> {
    if requester.role != Role::Admin {
        return Err(ServiceError::Forbidden("administrator role required"));
    }
    if draft.title.trim().is_empty() || draft.message.trim().is_empty() {
        return Err(ServiceError::Validation(
            "title and message are required".to_string(),
        ));
    }

    let broadcast = Broadcast {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        message: draft.message,
        audience: draft.audience,
        created_by: requester.id.clone(),
        created_at: Utc::now(),
    };
    provider.insert_broadcast(broadcast.clone()).await?;
    tracing::info!(broadcast_id = %broadcast.id, "Broadcast published");
    Ok(broadcast)
}

/// ## Summary
/// Lists the broadcasts addressed to a reader role, newest first.
///
/// ## Errors
/// Returns an error if the provider fetch fails.
pub async fn broadcasts_for(
    provider: &dyn DataProvider,
    role: Role,
) -> ServiceResult<Vec<Broadcast>> {
    let mut broadcasts = provider.fetch_broadcasts().await?;
    broadcasts.retain(|broadcast| broadcast.audience.includes(role));
    Ok(broadcasts)
}
