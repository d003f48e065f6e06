use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Deserialize;
use tracing::error;

use painel_store::model::Brand;
use painel_store::repository::Repository;

use super::render_error;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Create brand request payload
#[derive(Debug, Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
}

/// ## Summary
/// GET /api/brands - List all brands, newest first.
#[handler]
async fn list_brands(depot: &mut Depot, res: &mut Response) {
    match get_store_from_depot(depot) {
        Ok(store) => res.render(Json(store.brands.list())),
        Err(e) => {
            error!(error = ?e, "Failed to get store");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }
}

/// ## Summary
/// POST /api/brands - Register a new brand.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed or the name is blank
#[handler]
async fn create_brand(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let create_req: CreateBrandRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse create brand request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    if create_req.name.trim().is_empty() {
        render_error(res, StatusCode::BAD_REQUEST, "Brand name is required");
        return;
    }

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get store");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    let brand = Brand::new(create_req.name.trim());
    store.brands.upsert(brand.clone());

    tracing::info!(brand_id = %brand.id, name = %brand.name, "Brand created");

    res.status_code(StatusCode::CREATED);
    res.render(Json(brand));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("brands").get(list_brands).post(create_brand)
}
