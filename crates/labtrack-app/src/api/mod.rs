mod bookings;
mod broadcasts;
mod calendar;
mod healthcheck;
mod registrations;
mod resources;
mod timetable;
mod whoami;

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Response, Router};
use serde::Serialize;

use labtrack_service::error::ServiceError;

use crate::middleware::identity::IdentityMiddleware;

// Re-export route constants from core
pub use labtrack_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, BOOKINGS_ROUTE_COMPONENT, BOOKINGS_ROUTE_PREFIX,
    CALENDAR_ROUTE_COMPONENT, CALENDAR_ROUTE_PREFIX, TIMETABLE_ROUTE_COMPONENT,
    TIMETABLE_ROUTE_PREFIX,
};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Constructs the main API router with all handlers behind identity
/// resolution.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(IdentityMiddleware)
        .push(healthcheck::routes())
        .push(whoami::routes())
        .push(calendar::routes())
        .push(timetable::routes())
        .push(bookings::routes())
        .push(registrations::routes())
        .push(broadcasts::routes())
        .push(resources::routes())
}

/// ## Summary
/// Renders a service error as a JSON payload with the matching status
/// code.
pub(crate) fn render_service_error(res: &mut Response, err: &ServiceError) {
    let status = match err {
        ServiceError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::NotFound(_)
        | ServiceError::Data(labtrack_data::error::DataError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        ServiceError::Validation(_) | ServiceError::Sched(_) => StatusCode::BAD_REQUEST,
        ServiceError::Data(labtrack_data::error::DataError::Conflict(_)) => StatusCode::CONFLICT,
        ServiceError::Data(_) => StatusCode::SERVICE_UNAVAILABLE,
        ServiceError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = ?err, "Request failed");
    }
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: err.to_string(),
    }));
}
