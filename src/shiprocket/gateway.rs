//! Shiprocket order-creation gateway
//!
//! Submits a mapped order payload to Shiprocket with a bearer token and
//! classifies the outcome. Exactly one attempt per request: no retries, no
//! backoff.

use crate::order::payload::ProviderOrderPayload;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const CREATE_ORDER_PATH: &str = "/v1/external/orders/create/adhoc";

/// Hard deadline for the provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcomes of a provider call that did not create an order.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Provider returned 401; the configured token is invalid or expired.
    #[error("invalid or expired Shiprocket token")]
    Auth,

    /// Provider returned 422 and rejected the payload; carries the provider
    /// response body verbatim.
    #[error("order payload rejected by Shiprocket")]
    Rejected(Value),

    /// Provider returned an unexpected status.
    #[error("Shiprocket returned status {status}: {body}")]
    Unexpected { status: StatusCode, body: String },

    /// Provider reported success but its response carried no order id.
    #[error("Shiprocket response did not include an order id")]
    MissingOrderId,

    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("Shiprocket request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// An order accepted by Shiprocket.
#[derive(Debug)]
pub struct CreatedOrder {
    /// Provider-assigned order identifier, kept as raw JSON since the API
    /// returns it as a number.
    pub order_id: Value,
}

/// Authenticated client for Shiprocket's order-creation endpoint.
#[derive(Debug, Clone)]
pub struct ShiprocketGateway {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ShiprocketGateway {
    /// Builds the gateway with its own HTTP client bounded by
    /// [`REQUEST_TIMEOUT`].
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// Submits the order. A single attempt: the caller decides what each
    /// error class means for its own response.
    pub async fn create_order(
        &self,
        payload: &ProviderOrderPayload,
    ) -> Result<CreatedOrder, GatewayError> {
        let url = format!("{}{}", self.base_url, CREATE_ORDER_PATH);
        debug!(order_id = %payload.order_id, %url, "submitting order to Shiprocket");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        match status {
            s if s.is_success() => {
                let body: Value = response.json().await?;
                match body.get("order_id") {
                    Some(order_id) if !order_id.is_null() => Ok(CreatedOrder {
                        order_id: order_id.clone(),
                    }),
                    _ => Err(GatewayError::MissingOrderId),
                }
            }
            StatusCode::UNAUTHORIZED => Err(GatewayError::Auth),
            StatusCode::UNPROCESSABLE_ENTITY => {
                let body = response.json().await.unwrap_or(Value::Null);
                Err(GatewayError::Rejected(body))
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(GatewayError::Unexpected { status, body })
            }
        }
    }
}
