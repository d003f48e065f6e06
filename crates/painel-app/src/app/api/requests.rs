use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use painel_engine::clock::SystemClock;
use painel_engine::recurrence::ScheduleDescriptor;
use painel_service::dispatch::dispatch_request;
use painel_store::model::MessageRequest;
use painel_store::repository::Repository;

use super::{render_error, render_service_error};
use crate::gateway_handler::get_gateway_from_depot;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Create message request payload
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub representative_id: Uuid,
    pub brand_id: Uuid,
    pub template: String,
    pub schedule: ScheduleDescriptor,
}

/// ## Summary
/// GET /api/requests - List all message requests, newest first.
#[handler]
async fn list_requests(depot: &mut Depot, res: &mut Response) {
    match get_store_from_depot(depot) {
        Ok(store) => res.render(Json(store.requests.list())),
        Err(e) => {
            error!(error = ?e, "Failed to get store");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }
}

/// ## Summary
/// POST /api/requests - Create a recurring message request.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed or references an unknown
/// representative or brand
#[handler]
async fn create_request(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let create_req: CreateMessageRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse create message request");
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

    if store
        .representatives
        .get(create_req.representative_id)
        .is_none()
    {
        render_error(res, StatusCode::BAD_REQUEST, "Unknown representative");
        return;
    }
    if store.brands.get(create_req.brand_id).is_none() {
        render_error(res, StatusCode::BAD_REQUEST, "Unknown brand");
        return;
    }

    let request = MessageRequest::new(
        create_req.representative_id,
        create_req.brand_id,
        create_req.template,
        create_req.schedule,
    );
    store.requests.upsert(request.clone());

    tracing::info!(request_id = %request.id, "Message request created");

    res.status_code(StatusCode::CREATED);
    res.render(Json(request));
}

/// ## Summary
/// POST /`api/requests/:request_id/dispatch` - Render the request's
/// template and send it through the gateway adapter.
///
/// ## Errors
/// Returns HTTP 400 if the request id is malformed
/// Returns HTTP 404 if the request, representative, or brand is missing
/// Returns HTTP 502 if the gateway HTTP call fails
#[handler]
async fn dispatch_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(request_id_str) = req.param::<String>("request_id") else {
        render_error(res, StatusCode::BAD_REQUEST, "Request ID required");
        return;
    };
    let Ok(request_id) = Uuid::parse_str(&request_id_str) else {
        render_error(res, StatusCode::BAD_REQUEST, "Invalid request ID format");
        return;
    };

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get store");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };
    let gateway = match get_gateway_from_depot(depot) {
        Ok(g) => g,
        Err(e) => {
            error!(error = ?e, "Failed to get gateway client");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    match dispatch_request(&store, &gateway, request_id, &SystemClock).await {
        Ok(outcome) => res.render(Json(outcome)),
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("requests")
        .get(list_requests)
        .post(create_request)
        .push(Router::with_path("{request_id}/dispatch").post(dispatch_handler))
}
