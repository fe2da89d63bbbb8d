//! Ad-hoc lab booking endpoints.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;
use tracing::error;

use labtrack_sched::model::BookingStatus;
use labtrack_service::booking::{
    BookingDraft, cancel_booking, create_booking, list_bookings, set_booking_status,
};
use labtrack_service::error::ServiceError;

use super::{ErrorResponse, render_service_error};
use crate::data_handler::get_provider_from_depot;
use crate::middleware::identity::{RequestIdentity, current_identity};

#[derive(Debug, Deserialize)]
struct StatusRequest {
    status: BookingStatus,
}

/// ## Summary
/// GET /api/bookings - administrators list all bookings, others their own.
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
    let viewer = match current_identity(depot) {
        RequestIdentity::User(account) => account.viewer(),
        RequestIdentity::Guest => {
            render_service_error(res, &ServiceError::NotAuthenticated);
            return;
        }
    };

    match list_bookings(provider.as_ref(), &viewer).await {
        Ok(bookings) => res.render(Json(bookings)),
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// POST /api/bookings - creates a pending booking (faculty or admin).
///
/// ## Errors
/// Returns HTTP 401 for guests
/// Returns HTTP 403 for students
/// Returns HTTP 400 for an invalid body or time range
/// Returns HTTP 404 for an unknown lab
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
    let RequestIdentity::User(account) = current_identity(depot) else {
        render_service_error(res, &ServiceError::NotAuthenticated);
        return;
    };

    let draft: BookingDraft = match req.parse_json().await {
        Ok(d) => d,
        Err(e) => {
            error!(error = ?e, "Failed to parse booking draft");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    match create_booking(provider.as_ref(), &account, draft).await {
        Ok(booking) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(booking));
        }
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// DELETE /api/bookings/{booking_id} - cancels a booking (owner or admin).
#[handler]
async fn cancel_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
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
    let Some(booking_id) = req.param::<String>("booking_id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    match cancel_booking(provider.as_ref(), &viewer, &booking_id).await {
        Ok(booking) => res.render(Json(booking)),
        Err(err) => render_service_error(res, &err),
    }
}

/// ## Summary
/// PATCH /api/bookings/{booking_id}/status - flips the status enum
/// (admin only).
#[handler]
async fn status_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
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
    let Some(booking_id) = req.param::<String>("booking_id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    let body: StatusRequest = match req.parse_json().await {
        Ok(b) => b,
        Err(e) => {
            error!(error = ?e, "Failed to parse status request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    match set_booking_status(provider.as_ref(), &viewer, &booking_id, body.status).await {
        Ok(booking) => res.render(Json(booking)),
        Err(err) => render_service_error(res, &err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(super::BOOKINGS_ROUTE_COMPONENT)
        .get(list_handler)
        .post(create_handler)
        .push(Router::with_path("<booking_id>").delete(cancel_handler))
        .push(Router::with_path("<booking_id>/status").patch(status_handler))
}
