//! Dispatch orchestration: resolve a stored message request, render its
//! template, and hand the result to the gateway adapter.

use painel_engine::clock::Clock;
use painel_engine::phone;
use painel_engine::template::{TemplateContext, render};
use painel_store::MemoryStore;
use painel_store::repository::Repository;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::gateway::{GatewayClient, SendAck};

/// Result of dispatching one message request.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    pub request_id: Uuid,
    pub destination: String,
    pub message: String,
    pub ack: SendAck,
}

/// ## Summary
/// Renders and sends the message for a stored request.
///
/// The template context is built from the request's representative and
/// brand; the base date defaults to today.
///
/// ## Errors
/// - `NotFound` when the request, representative, or brand is missing.
/// - `PhoneError` when the stored number no longer validates.
/// - `GatewayError` when the gateway HTTP call fails.
pub async fn dispatch_request(
    store: &MemoryStore,
    gateway: &GatewayClient,
    request_id: Uuid,
    clock: &impl Clock,
) -> ServiceResult<DispatchOutcome> {
    let request = store
        .requests
        .get(request_id)
        .ok_or_else(|| ServiceError::NotFound(format!("message request {request_id}")))?;
    let representative = store
        .representatives
        .get(request.representative_id)
        .ok_or_else(|| {
            ServiceError::NotFound(format!("representative {}", request.representative_id))
        })?;
    let brand = store
        .brands
        .get(request.brand_id)
        .ok_or_else(|| ServiceError::NotFound(format!("brand {}", request.brand_id)))?;

    // Stored numbers are canonical already; revalidating is cheap and
    // guards seed-imported data.
    let destination = phone::validate(&representative.phone)?;

    let context = TemplateContext {
        rep_name: Some(representative.name.clone()),
        brand_name: Some(brand.name.clone()),
        base_date: None,
    };
    let message = render(&request.template, &context, clock);

    let ack = gateway.send_text(&destination, &message).await?;

    tracing::info!(
        request_id = %request_id,
        destination = %destination,
        mocked = ack.mocked,
        "message request dispatched"
    );

    Ok(DispatchOutcome {
        request_id,
        destination: destination.into_string(),
        message,
        ack,
    })
}
