use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use tracing::error;

use painel_service::representative::{NewRepresentative, register_representative};
use painel_store::repository::Repository;

use super::{render_error, render_service_error};
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// GET /api/representatives - List all representatives, newest first.
#[handler]
async fn list_representatives(depot: &mut Depot, res: &mut Response) {
    match get_store_from_depot(depot) {
        Ok(store) => res.render(Json(store.representatives.list())),
        Err(e) => {
            error!(error = ?e, "Failed to get store");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }
}

/// ## Summary
/// POST /api/representatives - Register a representative.
///
/// The phone number is validated into canonical form before the record
/// is stored; a second registration with the same canonical number is
/// rejected.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed, the name is blank, or the
/// phone number fails validation
/// Returns HTTP 409 if the canonical phone number is already registered
#[handler]
async fn create_representative(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let input: NewRepresentative = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse create representative request");
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

    match register_representative(&store, input) {
        Ok(representative) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(representative));
        }
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("representatives")
        .get(list_representatives)
        .post(create_representative)
}
