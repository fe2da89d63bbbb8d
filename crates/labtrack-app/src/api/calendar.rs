//! GET /api/calendar - the unified month view.

use chrono::NaiveDate;
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Serialize;
use tracing::error;

use labtrack_sched::model::{CalendarEvent, ScheduleFilter, Viewer};
use labtrack_service::calendar::build_calendar;

use super::{ErrorResponse, render_service_error};
use crate::data_handler::get_provider_from_depot;
use crate::middleware::identity::{RequestIdentity, current_identity};

/// ## Summary
/// Calendar response payload: events with their presentation accent.
#[derive(Debug, Serialize)]
struct EventPayload {
    #[serde(flatten)]
    event: CalendarEvent,
    accent: &'static str,
}

#[derive(Debug, Serialize)]
struct CalendarResponse {
    events: Vec<EventPayload>,
}

/// ## Summary
/// GET /api/calendar?month=YYYY-MM&course=..&semester=..
///
/// The month defaults to the current one. The course/semester pair is
/// only honored for administrators, pinning their master-schedule filter;
/// other viewers are scoped by their own role rules.
///
/// ## Errors
/// Returns HTTP 400 for an unparseable month
/// Returns HTTP 503 if the data provider fails mid-build
#[handler]
async fn get_calendar(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let provider = match get_provider_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get data provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let reference = match req.query::<String>("month") {
        Some(raw) => match parse_month(&raw) {
            Some(date) => date,
            None => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(ErrorResponse {
                    error: format!("month {raw:?} is not YYYY-MM"),
                }));
                return;
            }
        },
        None => chrono::Local::now().date_naive(),
    };

    let viewer = resolve_viewer(req, &current_identity(depot));

    match build_calendar(provider.as_ref(), &viewer, reference).await {
        Ok(events) => {
            let events = events
                .into_iter()
                .map(|event| EventPayload {
                    accent: event.accent().as_str(),
                    event,
                })
                .collect();
            res.render(Json(CalendarResponse { events }));
        }
        Err(err) => render_service_error(res, &err),
    }
}

/// An admin request may pin an explicit (course, semester) filter; the
/// pair is ignored unless both halves are present.
fn resolve_viewer(req: &mut Request, identity: &RequestIdentity) -> Viewer {
    let RequestIdentity::User(account) = identity else {
        return Viewer::Guest;
    };
    let mut viewer = account.viewer();
    if let Viewer::Admin { filter, .. } = &mut viewer {
        let course = req.query::<String>("course");
        let semester = req.query::<String>("semester");
        if let (Some(course), Some(semester)) = (course, semester) {
            if !course.trim().is_empty() && !semester.trim().is_empty() {
                *filter = Some(ScheduleFilter { course, semester });
            }
        }
    }
    viewer
}

fn parse_month(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d").ok()
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(super::CALENDAR_ROUTE_COMPONENT).get(get_calendar)
}
