//! Identity extraction from the trusted fronting proxy.
//!
//! Authentication happens upstream; the proxy forwards the authenticated
//! user id in a configurable header. This middleware resolves the header
//! to a directory account and stores the result in the depot. Anything
//! else - missing header, unknown id, unapproved registration - is public
//! access.

use salvo::Depot;
use tracing::error;

use labtrack_core::types::RegistrationStatus;
use labtrack_data::model::UserAccount;

use crate::config::get_config_from_depot;
use crate::data_handler::get_provider_from_depot;

pub mod depot_keys {
    pub const IDENTITY: &str = "identity";
}

/// Represents the resolved request identity in the depot.
#[derive(Debug, Clone)]
pub enum RequestIdentity {
    /// A directory account with an approved registration
    User(UserAccount),
    /// Unauthenticated/public access
    Guest,
}

/// ## Summary
/// Middleware handler for identity resolution.
/// Use this as a hoop on routes that need to know who is asking.
pub struct IdentityMiddleware;

#[salvo::async_trait]
impl salvo::Handler for IdentityMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let provider = match get_provider_from_depot(depot) {
            Ok(p) => p,
            Err(e) => {
                error!(error = ?e, "Failed to get data provider from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let Some(user_id) = req
            .headers()
            .get(config.identity.user_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
        else {
            depot.insert(depot_keys::IDENTITY, RequestIdentity::Guest);
            return;
        };

        match provider.fetch_user(user_id).await {
            Ok(Some(account)) if account.registration == RegistrationStatus::Approved => {
                tracing::debug!(user_id = %account.id, role = %account.role, "Identity resolved");
                depot.insert(depot_keys::IDENTITY, RequestIdentity::User(account));
            }
            Ok(Some(account)) => {
                tracing::debug!(
                    user_id = %account.id,
                    registration = %account.registration,
                    "Account not approved, treating as public"
                );
                depot.insert(depot_keys::IDENTITY, RequestIdentity::Guest);
            }
            Ok(None) => {
                tracing::debug!(user_id, "Unknown user id, treating as public");
                depot.insert(depot_keys::IDENTITY, RequestIdentity::Guest);
            }
            Err(e) => {
                error!(error = ?e, "Identity lookup failed");
                res.status_code(salvo::http::StatusCode::SERVICE_UNAVAILABLE);
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Reads the identity stored by `IdentityMiddleware`, defaulting to guest.
#[must_use]
pub fn current_identity(depot: &Depot) -> RequestIdentity {
    depot
        .get::<RequestIdentity>(depot_keys::IDENTITY)
        .ok()
        .cloned()
        .unwrap_or(RequestIdentity::Guest)
}
