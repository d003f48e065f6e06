//! Messaging gateway adapter.
//!
//! When the gateway is not configured the adapter answers with a mocked
//! acknowledgment instead of performing network I/O, so the rest of the
//! panel keeps working in development and tests.

use painel_core::config::GatewayConfig;
use painel_engine::phone::PhoneNumber;
use serde::Serialize;

use crate::error::ServiceResult;

/// Acknowledgment returned by a send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendAck {
    pub ok: bool,
    /// True when no real gateway was contacted.
    pub mocked: bool,
}

/// Client for the external text-message gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// ## Summary
    /// Sends `message` to `destination` through the configured gateway,
    /// or returns a mocked acknowledgment when no gateway is configured.
    ///
    /// ## Errors
    /// Returns a gateway error when the HTTP request itself fails. A
    /// non-2xx gateway response is reported as `ok: false`, not an error.
    pub async fn send_text(
        &self,
        destination: &PhoneNumber,
        message: &str,
    ) -> ServiceResult<SendAck> {
        let (Some(base_url), Some(session)) = (&self.config.base_url, &self.config.session)
        else {
            tracing::warn!(
                destination = %destination,
                "gateway not configured, returning mocked acknowledgment"
            );
            return Ok(SendAck {
                ok: true,
                mocked: true,
            });
        };

        let url = format!("{base_url}/message/sendText/{session}");
        let payload = serde_json::json!({
            "phone": destination.as_str(),
            "message": message,
        });

        let response = self.http.post(&url).json(&payload).send().await?;
        let ok = response.status().is_success();
        tracing::info!(
            destination = %destination,
            status = %response.status(),
            "gateway send completed"
        );

        Ok(SendAck { ok, mocked: false })
    }
}
