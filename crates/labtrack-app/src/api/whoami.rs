use salvo::prelude::Json;
use salvo::{Depot, Router, handler};
use serde_json::json;

use crate::middleware::identity::{RequestIdentity, current_identity};

/// ## Summary
/// Returns the resolved identity as JSON.
/// The identity is retrieved from the depot set by the `IdentityMiddleware`.
#[handler]
async fn whoami(depot: &Depot) -> salvo::prelude::Json<serde_json::Value> {
    match current_identity(depot) {
        RequestIdentity::User(account) => Json(serde_json::to_value(&account).unwrap_or(json!(null))),
        RequestIdentity::Guest => Json(json!({"status": "guest"})),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("whoami").get(whoami)
}
