//! Shared-resource records. The file bytes live on the external CDN;
//! this service only records the pointer.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use labtrack_core::types::Role;
use labtrack_data::model::{SharedResource, UserAccount};
use labtrack_data::provider::DataProvider;

use crate::error::{ServiceError, ServiceResult};

/// Incoming resource fields, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    pub subject: String,
    pub url: String,
}

/// ## Summary
/// Records a shared resource uploaded by a faculty member or
/// administrator.
///
/// ## Errors
/// Returns `Forbidden` for students and `Validation` for a blank title or
/// a URL that is not http(s).
pub async fn share_resource(
    provider: &dyn DataProvider,
    requester: &UserAccount,
    draft: ResourceDraft,
) -> ServiceResult<SharedResource> {
    if !matches!(requester.role, Role::Faculty | Role::Admin) {
        return Err(ServiceError::Forbidden(
            "faculty or administrator role required",
        ));
    }
    if draft.title.trim().is_empty() {
        return Err(ServiceError::Validation("title is required".to_string()));
    }
    if !draft.url.starts_with("http://") && !draft.url.starts_with("https://") {
        return Err(ServiceError::Validation(
            "url must be an http(s) delivery link".to_string(),
        ));
    }

    let resource = SharedResource {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        subject: draft.subject,
        url: draft.url,
        uploader_id: requester.id.clone(),
        uploaded_at: Utc::now(),
    };
    provider.insert_resource(resource.clone()).await?;
    tracing::info!(resource_id = %resource.id, "Resource shared");
    Ok(resource)
}

/// ## Summary
/// Lists shared resources, newest first.
///
/// ## Errors
/// Returns an error if the provider fetch fails.
pub async fn list_resources(provider: &dyn DataProvider) -> ServiceResult<Vec<SharedResource>> {
    Ok(provider.fetch_resources().await?)
}
