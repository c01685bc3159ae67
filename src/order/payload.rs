//! Shiprocket payload mapping
//!
//! Pure translation from a validated [`CheckoutSubmission`] into the shape
//! expected by Shiprocket's adhoc order-creation endpoint. The order date is
//! an argument rather than a clock read so the mapping stays deterministic.

use super::models::CheckoutSubmission;
use chrono::NaiveDate;
use serde::Serialize;

/// Package dimensions in centimetres, fixed for every shipment.
const PKG_LENGTH: f64 = 30.0;
const PKG_BREADTH: f64 = 20.0;
const PKG_HEIGHT: f64 = 5.0;

/// Estimated weight per unit in kilograms.
const WEIGHT_PER_UNIT: f64 = 0.5;

/// HSN code for printed books, applied to every line.
const HSN_CODE: &str = "4901";

/// Order body for `POST /v1/external/orders/create/adhoc`.
#[derive(Debug, Serialize, PartialEq)]
pub struct ProviderOrderPayload {
    pub order_id: String,
    pub order_date: String,
    pub pickup_location: String,
    pub billing_customer_name: String,
    pub billing_last_name: String,
    pub billing_address: String,
    pub billing_city: String,
    pub billing_pincode: String,
    pub billing_state: String,
    pub billing_country: String,
    pub billing_email: String,
    pub billing_phone: String,
    /// Shipping address is always taken from billing; the storefront only
    /// collects one address.
    pub shipping_is_billing: bool,
    pub order_items: Vec<OrderItemPayload>,
    pub payment_method: String,
    pub shipping_charges: f64,
    pub total_discount: f64,
    pub sub_total: f64,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    pub weight: f64,
}

/// One order line in the provider schema.
#[derive(Debug, Serialize, PartialEq)]
pub struct OrderItemPayload {
    pub name: String,
    pub sku: String,
    pub units: f64,
    pub selling_price: f64,
    pub discount: f64,
    pub tax: f64,
    pub hsn: String,
}

/// Maps a validated submission onto the provider schema.
pub fn build_provider_payload(
    submission: &CheckoutSubmission,
    pickup_location: &str,
    order_date: NaiveDate,
) -> ProviderOrderPayload {
    let order_items = submission
        .cart
        .iter()
        .map(|item| OrderItemPayload {
            name: item.name.clone(),
            sku: format!("SKU-{}", item.id),
            units: item.quantity,
            selling_price: item.price,
            discount: 0.0,
            tax: 0.0,
            hsn: HSN_CODE.to_string(),
        })
        .collect();

    let total_units: f64 = submission.cart.iter().map(|item| item.quantity).sum();

    ProviderOrderPayload {
        order_id: submission.order_id.clone(),
        order_date: order_date.format("%Y-%m-%d").to_string(),
        pickup_location: pickup_location.to_string(),
        billing_customer_name: submission.form.name.clone(),
        billing_last_name: String::new(),
        billing_address: submission.form.address.clone(),
        billing_city: submission.form.city.clone().unwrap_or_default(),
        billing_pincode: submission.form.pincode.clone(),
        billing_state: submission.form.state.clone(),
        billing_country: "India".to_string(),
        billing_email: submission.form.email.clone(),
        billing_phone: submission.form.phone.clone(),
        shipping_is_billing: true,
        order_items,
        payment_method: "Prepaid".to_string(),
        shipping_charges: submission.shipping_cost,
        total_discount: submission.coupon_discount,
        sub_total: submission.total_amount,
        length: PKG_LENGTH,
        breadth: PKG_BREADTH,
        height: PKG_HEIGHT,
        weight: WEIGHT_PER_UNIT * total_units,
    }
}
