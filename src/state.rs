//! Application State
//!
//! Wires the configuration into the long-lived clients. Built once in `main`
//! and shared across requests behind an `Arc`; there is no mutable state,
//! every request is independent.

use crate::config::Config;
use crate::shiprocket::ShiprocketGateway;
use std::sync::Arc;
use std::time::Duration;

/// Deadline for the `/my-ip` lookup, which the upstream service would
/// otherwise leave unbounded.
const IP_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Immutable per-process state: configuration plus outbound clients.
pub struct AppState {
    pub config: Config,

    /// Authenticated Shiprocket client with its own request timeout.
    pub gateway: ShiprocketGateway,

    /// Client for the public IP-echo service.
    pub ip_client: reqwest::Client,
}

impl AppState {
    /// Builds the state from a loaded configuration.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let gateway =
            ShiprocketGateway::new(config.shiprocket_base_url.as_str(), config.shiprocket_token.as_str())?;
        let ip_client = reqwest::Client::builder()
            .timeout(IP_LOOKUP_TIMEOUT)
            .build()?;

        Ok(Self {
            config,
            gateway,
            ip_client,
        })
    }
}
