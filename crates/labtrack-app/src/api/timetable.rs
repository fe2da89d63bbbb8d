//! Master timetable administration endpoints.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use tracing::error;

use labtrack_service::timetable::{
    SlotDraft, create_slot, delete_slot, list_slots, update_slot,
};

use super::{ErrorResponse, render_service_error};
use crate::data_handler::get_provider_from_depot;
use crate::middleware::identity::current_identity;
use crate::middleware::identity::RequestIdentity;

use labtrack_sched::model::Viewer;

fn viewer_from(depot: &Depot) -> Viewer {
    match current_identity(depot) {
        RequestIdentity::User(account) => account.viewer(),
        RequestIdentity::Guest => Viewer::Guest,
    }
}

/// ## Summary
/// GET /api/timetable?course=..&semester=.. - lists slots for one pair.
#[handler]
async fn list_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };
    let course = req.query::<String>("course").unwrap_or_default();
    let semester = req.query::<String>("semester").unwrap_or_default();

    match list_slots(provider.as_ref(), &course, &semester).await {
        Ok(slots) => res.render(Json(slots)),
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// POST /api/timetable - creates a recurring slot (admin only).
///
/// ## Errors
/// Returns HTTP 400 for an invalid body or draft fields
/// Returns HTTP 403 for non-admin callers
#[handler]
async fn create_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let draft: SlotDraft = match req.parse_json().await {
        Ok(d) => d,
        Err(e) => {
            error!(error = ?e, "Failed to parse slot draft");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    match create_slot(provider.as_ref(), &viewer_from(depot), draft).await {
        Ok(slot) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(slot));
        }
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// PUT /api/timetable/{slot_id} - replaces a slot (admin only).
#[handler]
async fn update_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };
    let Some(slot_id) = req.param::<String>("slot_id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    let draft: SlotDraft = match req.parse_json().await {
        Ok(d) => d,
        Err(e) => {
            error!(error = ?e, "Failed to parse slot draft");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    match update_slot(provider.as_ref(), &viewer_from(depot), &slot_id, draft).await {
        Ok(slot) => res.render(Json(slot)),
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// DELETE /api/timetable/{slot_id} - removes a slot (admin only).
#[handler]
async fn delete_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };
    let Some(slot_id) = req.param::<String>("slot_id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    match delete_slot(provider.as_ref(), &viewer_from(depot), &slot_id).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(err) => render_service_error(res, &err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(super::TIMETABLE_ROUTE_COMPONENT)
        .get(list_handler)
        .post(create_handler)
        .push(
            Router::with_path("<slot_id>")
                .put(update_handler)
                .delete(delete_handler),
        )
}
