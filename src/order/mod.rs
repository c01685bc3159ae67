//! Order Relay Domain Module
//!
//! This module contains the checkout-to-shipping business logic, including:
//! - Wire and domain models (submission inputs, validated types, responses)
//! - Submission validation
//! - Provider payload mapping
//! - REST API handler for order creation

pub mod handlers;
pub mod models;
pub mod payload;
pub mod validate;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CheckoutSubmission, LineItem, ShippingForm};
pub use validate::{validate, ValidationError};
