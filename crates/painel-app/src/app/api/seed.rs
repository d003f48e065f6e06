use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use painel_store::model::{Brand, MessageRequest, PanelConfigEntry, Representative};
use painel_store::repository::Repository;

use super::render_error;
use crate::store_handler::get_store_from_depot;

/// Snapshot of every collection, used to export and bulk-replace the
/// store during development.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub representatives: Vec<Representative>,
    #[serde(default)]
    pub requests: Vec<MessageRequest>,
    #[serde(default)]
    pub config: Vec<PanelConfigEntry>,
}

/// ## Summary
/// GET /api/seed - Export all collections.
#[handler]
async fn export_seed(depot: &mut Depot, res: &mut Response) {
    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get store");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    res.render(Json(SeedData {
        brands: store.brands.list(),
        representatives: store.representatives.list(),
        requests: store.requests.list(),
        config: store.config_entries.list(),
    }));
}

/// ## Summary
/// POST /api/seed - Replace every collection with the posted snapshot.
/// Collections absent from the body are cleared.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed
#[handler]
async fn import_seed(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let seed: SeedData = match req.parse_json().await {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to parse seed payload");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get store");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    tracing::info!(
        brands = seed.brands.len(),
        representatives = seed.representatives.len(),
        requests = seed.requests.len(),
        config = seed.config.len(),
        "Replacing store contents from seed"
    );

    store.brands.replace_all(seed.brands);
    store.representatives.replace_all(seed.representatives);
    store.requests.replace_all(seed.requests);
    store.config_entries.replace_all(seed.config);

    res.render(Json(json!({ "ok": true })));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("seed").get(export_seed).post(import_seed)
}
