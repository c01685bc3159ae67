//! Process configuration
//!
//! All runtime settings come from the environment and are read exactly once
//! at startup. The resulting [`Config`] is passed explicitly through the
//! application state instead of living in globals.

use thiserror::Error;

/// Default Shiprocket API base, overridable for tests and staging.
const DEFAULT_BASE_URL: &str = "https://apiv2.shiprocket.in";

/// Default public IP-echo service used by the `/my-ip` endpoint.
const DEFAULT_IP_ECHO_URL: &str = "https://api.ipify.org/?format=json";

const DEFAULT_PORT: u16 = 8000;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),

    #[error("{0} has invalid value {1:?}")]
    InvalidVar(&'static str, String),
}

/// Immutable runtime configuration, constructed once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the Shiprocket API.
    pub shiprocket_token: String,

    /// Pickup location identifier registered with Shiprocket.
    pub pickup_location: String,

    /// Base URL of the Shiprocket API (no trailing slash).
    pub shiprocket_base_url: String,

    /// URL of the public IP-echo service backing `/my-ip`.
    pub ip_echo_url: String,

    /// TCP port the server listens on.
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `SHIPROCKET_TOKEN` is required; everything else falls back to a
    /// default. Fails fast so a misconfigured process never accepts traffic.
    pub fn from_env() -> Result<Self, ConfigError> {
        let shiprocket_token = std::env::var("SHIPROCKET_TOKEN")
            .map_err(|_| ConfigError::MissingVar("SHIPROCKET_TOKEN"))?;

        let pickup_location = std::env::var("SHIPROCKET_PICKUP_LOCATION")
            .unwrap_or_else(|_| "Primary".to_string());

        let shiprocket_base_url = std::env::var("SHIPROCKET_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let ip_echo_url =
            std::env::var("IP_ECHO_URL").unwrap_or_else(|_| DEFAULT_IP_ECHO_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            shiprocket_token,
            pickup_location,
            shiprocket_base_url,
            ip_echo_url,
            port,
        })
    }
}
