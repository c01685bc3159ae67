//! Public IP disclosure endpoint
//!
//! Shiprocket allow-lists callers by IP, so `/my-ip` relays this server's
//! public address from an IP-echo service. Pure pass-through; any failure
//! collapses into a generic 500.

use crate::state::SharedState;
use axum::http::StatusCode;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::error;

pub fn routes() -> Router<SharedState> {
    Router::new().route("/my-ip", get(my_ip))
}

/// Endpoint: GET /my-ip
async fn my_ip(State(state): State<SharedState>) -> impl IntoResponse {
    match fetch_public_ip(&state.ip_client, &state.config.ip_echo_url).await {
        Ok(ip) => (StatusCode::OK, Json(json!({ "ip": ip }))),
        Err(err) => {
            error!(error = %err, "public IP lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch public IP" })),
            )
        }
    }
}

async fn fetch_public_ip(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    let body: Value = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(body
        .get("ip")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}
