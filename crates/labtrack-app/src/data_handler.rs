use std::sync::Arc;

use salvo::async_trait;

use labtrack_core::error::CoreError;
use labtrack_data::provider::DataProvider;

use crate::error::AppResult;

pub struct DataProviderHandler {
    pub provider: Arc<dyn DataProvider>,
}

#[async_trait]
impl salvo::Handler for DataProviderHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.provider));
    }
}

/// ## Summary
/// Retrieves the data provider from the depot.
///
/// ## Errors
/// Returns an error if the data provider is not found in the depot.
pub fn get_provider_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn DataProvider>> {
    depot
        .obtain::<Arc<dyn DataProvider>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Data provider not found in depot").into())
}
