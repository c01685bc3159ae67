//! Shiprocket Provider Module
//!
//! Everything that talks to the Shiprocket API lives here: the authenticated
//! gateway, its error taxonomy and the accepted-order result type.

pub mod gateway;

// Re-export commonly used types for convenience
pub use gateway::{CreatedOrder, GatewayError, ShiprocketGateway};
