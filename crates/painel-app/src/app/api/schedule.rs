use salvo::{Request, Response, Router, handler, http::StatusCode, writing::Json};
use tracing::error;

use painel_engine::clock::SystemClock;
use painel_service::preview::{PreviewRequest, build_preview};

use super::render_error;

/// ## Summary
/// POST /api/schedule/preview - Preview a schedule before confirming it:
/// pt-BR description, upcoming occurrences, and the rendered message when
/// a template is supplied.
///
/// The occurrence count is capped server-side; degenerate descriptors
/// (custom rules, empty weekday sets) preview as an empty occurrence
/// list rather than an error.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed
#[handler]
async fn preview_handler(req: &mut Request, res: &mut Response) {
    let preview_req: PreviewRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse preview request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    res.render(Json(build_preview(&preview_req, &SystemClock)));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("schedule/preview").post(preview_handler)
}
