mod brands;
mod health;
mod representatives;
mod requests;
mod schedule;
mod seed;

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Response, Router};
use serde::Serialize;

use painel_service::error::ServiceError;

// Re-export route constants from core
pub use painel_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, HEALTH_ROUTE_COMPONENT, HEALTH_ROUTE_PREFIX,
};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Writes a JSON error payload with the given status.
pub(crate) fn render_error(res: &mut Response, status: StatusCode, message: impl Into<String>) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.into(),
    }));
}

/// Maps a service error onto an HTTP status and JSON payload.
pub(crate) fn render_service_error(res: &mut Response, err: &ServiceError) {
    let status = match err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::PhoneError(_) | ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ServiceError::GatewayError(_) => StatusCode::BAD_GATEWAY,
        ServiceError::CoreError(_) | ServiceError::InvalidConfiguration(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    render_error(res, status, err.to_string());
}

/// ## Summary
/// Constructs the main router: the health probe plus the `/api`
/// collection and scheduling endpoints.
#[must_use]
pub fn routes() -> Router {
    Router::new().push(health::routes()).push(
        Router::with_path(API_ROUTE_COMPONENT)
            .push(brands::routes())
            .push(representatives::routes())
            .push(requests::routes())
            .push(schedule::routes())
            .push(seed::routes()),
    )
}
