use salvo::prelude::Json;
use salvo::{Router, handler};
use serde_json::json;

use super::HEALTH_ROUTE_COMPONENT;

#[handler]
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(HEALTH_ROUTE_COMPONENT).get(health)
}
