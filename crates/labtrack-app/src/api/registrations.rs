//! Registration review endpoints (admin only).

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;
use tracing::error;

use labtrack_core::types::RegistrationStatus;
use labtrack_service::directory::{pending_registrations, review_registration};
use labtrack_service::error::ServiceError;

use super::{ErrorResponse, render_service_error};
use crate::data_handler::get_provider_from_depot;
use crate::middleware::identity::{RequestIdentity, current_identity};

#[derive(Debug, Deserialize)]
struct ReviewRequest {
    decision: RegistrationStatus,
}

/// ## Summary
/// GET /api/registrations - lists accounts waiting for review.
#[handler]
async fn pending_handler(depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };
    let viewer = match current_identity(depot) {
        RequestIdentity::User(account) => account.viewer(),
        RequestIdentity::Guest => {
            render_service_error(res, &ServiceError::NotAuthenticated);
            return;
        }
    };

    match pending_registrations(provider.as_ref(), &viewer).await {
        Ok(accounts) => res.render(Json(accounts)),
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// PATCH /api/registrations/{user_id} - approves or rejects an account.
///
/// ## Errors
/// Returns HTTP 403 for non-admin callers
/// Returns HTTP 400 when the decision is "pending"
/// Returns HTTP 404 for an unknown account
#[handler]
async fn review_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };
    let viewer = match current_identity(depot) {
        RequestIdentity::User(account) => account.viewer(),
        RequestIdentity::Guest => {
            render_service_error(res, &ServiceError::NotAuthenticated);
            return;
        }
    };
    let Some(user_id) = req.param::<String>("user_id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    let body: ReviewRequest = match req.parse_json().await {
        Ok(b) => b,
        Err(e) => {
            error!(error = ?e, "Failed to parse review request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    match review_registration(provider.as_ref(), &viewer, &user_id, body.decision).await {
        Ok(account) => res.render(Json(account)),
        Err(err) => render_service_error(res, &err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("registrations")
        .get(pending_handler)
        .push(Router::with_path("<user_id>").patch(review_handler))
}
