//! Order Relay Library
//!
//! This library provides the core functionality for a checkout-to-shipping
//! relay: it validates incoming checkout submissions, maps them into the
//! Shiprocket order-creation schema and forwards them over HTTPS.

// Domain modules
pub mod order;
pub mod shiprocket;

// Infrastructure
pub mod config;
pub mod ip;
pub mod router;
pub mod state;
