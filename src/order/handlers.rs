//! REST API handler for order creation
//!
//! Implements `POST /api/create-order`: validate the submission, map it to
//! the provider schema, forward it, and translate the outcome into the
//! caller-facing JSON contract. Client errors never reach the provider.

use super::models::{CreateOrderInput, ErrorResponse, OrderCreatedResponse};
use super::payload::build_provider_payload;
use super::validate::validate;
use crate::shiprocket::GatewayError;
use crate::state::SharedState;
use axum::http::StatusCode;
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{error, info, warn};

/// Creates routes for order-relay operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/create-order", post(create_order))
}

/// Endpoint: POST /api/create-order
/// Validates a checkout submission and books it with Shiprocket.
async fn create_order(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    // The wire struct tolerates any field types; a non-object body falls
    // through to validation as an empty submission. Client errors stay 400.
    let input: CreateOrderInput = serde_json::from_value(body).unwrap_or_default();

    let submission = match validate(input) {
        Ok(submission) => submission,
        Err(err) => {
            warn!(reason = %err, details = ?err.details(), "rejected checkout submission");
            return error_response(StatusCode::BAD_REQUEST, err.to_string(), err.details());
        }
    };

    // Zero is suspicious (free order) but not fatal.
    if submission.total_amount == 0.0 {
        warn!(order_id = %submission.order_id, "checkout submitted with zero total amount");
    }

    let payload = build_provider_payload(
        &submission,
        &state.config.pickup_location,
        Utc::now().date_naive(),
    );

    match state.gateway.create_order(&payload).await {
        Ok(created) => {
            info!(
                order_id = %submission.order_id,
                shiprocket_order_id = %created.order_id,
                "order created in Shiprocket"
            );
            (
                StatusCode::OK,
                Json(OrderCreatedResponse {
                    success: true,
                    shiprocket_order_id: created.order_id,
                    message: "Order created successfully in Shiprocket".to_string(),
                }),
            )
                .into_response()
        }
        Err(GatewayError::Auth) => {
            error!(order_id = %submission.order_id, "Shiprocket rejected the API token");
            error_response(
                StatusCode::UNAUTHORIZED,
                "Shiprocket authentication failed",
                Some(json!("Invalid or expired Shiprocket token")),
            )
        }
        Err(GatewayError::Rejected(details)) => {
            warn!(order_id = %submission.order_id, provider_details = %details, "Shiprocket rejected the order payload");
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid order data for Shiprocket",
                Some(details),
            )
        }
        Err(err) => {
            error!(order_id = %submission.order_id, error = %err, "Shiprocket order creation failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create order in Shiprocket",
                Some(json!(err.to_string())),
            )
        }
    }
}

fn error_response(
    status: StatusCode,
    error: impl Into<String>,
    details: Option<Value>,
) -> axum::response::Response {
    (status, Json(ErrorResponse::new(error, details))).into_response()
}
