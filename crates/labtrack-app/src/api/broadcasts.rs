//! Broadcast notification endpoints.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use tracing::error;

use labtrack_service::broadcast::{BroadcastDraft, broadcasts_for, publish_broadcast};
use labtrack_service::error::ServiceError;

use super::{ErrorResponse, render_service_error};
use crate::data_handler::get_provider_from_depot;
use crate::middleware::identity::{RequestIdentity, current_identity};

/// ## Summary
/// GET /api/broadcasts - lists broadcasts addressed to the reader's role.
#[handler]
async fn list_handler(depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };
    let RequestIdentity::User(account) = current_identity(depot) else {
        render_service_error(res, &ServiceError::NotAuthenticated);
        return;
    };

    match broadcasts_for(provider.as_ref(), account.role).await {
        Ok(broadcasts) => res.render(Json(broadcasts)),
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// POST /api/broadcasts - composes a broadcast record (admin only).
///
/// ## Errors
/// Returns HTTP 401 for guests
/// Returns HTTP 403 for non-admin callers
/// Returns HTTP 400 for a blank title or message
#[handler]
async fn publish_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };
    let RequestIdentity::User(account) = current_identity(depot) else {
        render_service_error(res, &ServiceError::NotAuthenticated);
        return;
    };

    let draft: BroadcastDraft = match req.parse_json().await {
        Ok(d) => d,
        Err(e) => {
            error!(error = ?e, "Failed to parse broadcast draft");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    match publish_broadcast(provider.as_ref(), &account, draft).await {
        Ok(broadcast) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(broadcast));
        }
        Err(err) => render_service_error(res, &err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("broadcasts")
        .get(list_handler)
        .post(publish_handler)
}
