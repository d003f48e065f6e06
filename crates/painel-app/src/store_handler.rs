use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use painel_core::error::CoreError;
use painel_store::MemoryStore;

pub struct StoreHandler {
    pub store: Arc<MemoryStore>,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the record store from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<MemoryStore>> {
    depot
        .obtain::<Arc<MemoryStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Store not found in depot").into())
}
