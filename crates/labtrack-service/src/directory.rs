//! Registration review: listing pending accounts and flipping their
//! approval status. Credential and session handling stay with the
//! external identity collaborator.

use labtrack_core::types::RegistrationStatus;
use labtrack_data::model::UserAccount;
use labtrack_data::provider::DataProvider;
use labtrack_sched::model::Viewer;

use crate::error::{ServiceError, ServiceResult};
use crate::timetable::require_admin;

/// ## Summary
/// Lists accounts waiting for registration review. Administrator only.
///
/// ## Errors
/// Returns `Forbidden` for non-admin callers.
pub async fn pending_registrations(
    provider: &dyn DataProvider,
    viewer: &Viewer,
) -> ServiceResult<Vec<UserAccount>> {
    require_admin(viewer)?;
    Ok(provider
        .fetch_users_by_status(RegistrationStatus::Pending)
        .await?)
}

/// ## Summary
/// Resolves a pending registration to approved or rejected.
///
/// ## Errors
/// Returns `Forbidden` for non-admin callers, `Validation` when the
/// decision is `Pending`, and `NotFound` for an unknown account.
pub async fn review_registration(
    provider: &dyn DataProvider,
    viewer: &Viewer,
    user_id: &str,
    decision: RegistrationStatus,
) -> ServiceResult<UserAccount> {
    require_admin(viewer)?;
    if decision == RegistrationStatus::Pending {
        return Err(ServiceError::Validation(
            "a review must approve or reject".to_string(),
        ));
    }
    let account = provider
        .update_registration_status(user_id, decision)
        .await?;
    tracing::info!(user_id = %user_id, decision = %decision, "Registration reviewed");
    Ok(account)
}
