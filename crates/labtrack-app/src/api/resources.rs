//! Shared resource endpoints.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use tracing::error;

use labtrack_service::error::ServiceError;
use labtrack_service::resource::{ResourceDraft, list_resources, share_resource};

use super::{ErrorResponse, render_service_error};
use crate::data_handler::get_provider_from_depot;
use crate::middleware::identity::{RequestIdentity, current_identity};

/// ## Summary
/// GET /api/resources - lists shared resources, newest first.
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

    match list_resources(provider.as_ref()).await {
        Ok(resources) => res.render(Json(resources)),
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// POST /api/resources - records a CDN-hosted resource (faculty or admin).
///
/// ## Errors
/// Returns HTTP 401 for guests
/// Returns HTTP 403 for students
/// Returns HTTP 400 for a blank title or a non-http(s) URL
#[handler]
async fn share_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
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

    let draft: ResourceDraft = match req.parse_json().await {
        Ok(d) => d,
        Err(e) => {
            error!(error = ?e, "Failed to parse resource draft");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    match share_resource(provider.as_ref(), &account, draft).await {
        Ok(resource) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(resource));
        }
        Err(err) => render_service_error(res, &err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("resources")
        .get(list_handler)
        .post(share_handler)
}
