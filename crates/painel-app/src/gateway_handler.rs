use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use painel_core::error::CoreError;
use painel_service::gateway::GatewayClient;

pub struct GatewayHandler {
    pub client: Arc<GatewayClient>,
}

#[async_trait]
impl salvo::Handler for GatewayHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.client));
    }
}

/// ## Summary
/// Retrieves the gateway client from the depot.
///
/// ## Errors
/// Returns an error if the gateway client is not found in the depot.
pub fn get_gateway_from_depot(depot: &salvo::Depot) -> AppResult<Arc<GatewayClient>> {
    depot
        .obtain::<Arc<GatewayClient>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Gateway client not found in depot").into())
}
