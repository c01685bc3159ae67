//! Order Domain Models
//!
//! Two layers of types live here: the wire-level input structs, which accept
//! any JSON shape so that an incomplete or wrong-typed submission reaches the
//! validator instead of being rejected by the JSON deserializer, and the
//! validated domain structs the mapper and gateway operate on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Wire input (as posted by the storefront)
// =============================================================================

/// Lenient field deserializers for the wire structs.
///
/// A field of the wrong JSON type counts as absent rather than failing the
/// whole body, so the validator gets to classify it with the contract's
/// rejection reasons instead of the deserializer answering 422.
mod lenient {
    use serde::{de::DeserializeOwned, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(de)?;
        Ok(value.as_ref().and_then(Value::as_str).map(str::to_string))
    }

    pub fn number<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
        let value = Option::<Value>::deserialize(de)?;
        Ok(value.as_ref().and_then(Value::as_f64))
    }

    /// Nested object; anything that does not fit the target shape is absent.
    pub fn nested<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(de)?;
        Ok(value.and_then(|v| serde_json::from_value(v).ok()))
    }

    /// Array of objects; a non-array collapses to empty, a non-object element
    /// becomes an empty (and therefore invalid) entry at its own index.
    pub fn array<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Option::<Value>::deserialize(de)?;
        match value {
            Some(Value::Array(elements)) => Ok(elements
                .into_iter()
                .map(|element| serde_json::from_value(element).unwrap_or_default())
                .collect()),
            _ => Ok(Vec::new()),
        }
    }
}

/// Raw body of `POST /api/create-order`, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    #[serde(default, deserialize_with = "lenient::string")]
    pub order_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::array")]
    pub cart: Vec<CartItemInput>,

    #[serde(default, deserialize_with = "lenient::nested")]
    pub form_data: Option<ShippingFormInput>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub total_amount: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub shipping_cost: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub coupon_discount: Option<f64>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub payment_id: Option<String>,

    /// Quoted delivery estimate from the storefront; accepted but not
    /// forwarded to Shiprocket.
    #[serde(default, deserialize_with = "lenient::number")]
    pub delivery_days: Option<f64>,
}

/// One cart entry as posted by the storefront.
#[derive(Debug, Default, Deserialize)]
pub struct CartItemInput {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
}

/// Customer shipping form as posted by the storefront.
#[derive(Debug, Default, Deserialize)]
pub struct ShippingFormInput {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub pincode: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub state: Option<String>,
}

// =============================================================================
// Validated domain types
// =============================================================================

/// A checkout submission that passed every validation check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSubmission {
    pub order_id: String,
    pub cart: Vec<LineItem>,
    pub form: ShippingForm,
    pub total_amount: f64,
    pub shipping_cost: f64,
    pub coupon_discount: f64,
    pub payment_id: String,
}

/// A validated cart line: identity, finite price, positive finite quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

/// A complete shipping form; only `city` may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: Option<String>,
    pub pincode: String,
    pub state: String,
}

// =============================================================================
// Response envelopes
// =============================================================================

/// Success body for `POST /api/create-order`.
#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub success: bool,

    /// Provider-assigned order identifier, echoed as received.
    #[serde(rename = "shiprocketOrderId")]
    pub shiprocket_order_id: Value,

    pub message: String,
}

/// Error body shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,

    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrong_typed_fields_deserialize_as_absent() {
        let input: CreateOrderInput = serde_json::from_value(json!({
            "orderId": 42,
            "cart": "not-a-list",
            "formData": "not-an-object",
            "totalAmount": "two hundred",
            "paymentId": ["P1"]
        }))
        .unwrap();

        assert_eq!(input.order_id, None);
        assert!(input.cart.is_empty());
        assert!(input.form_data.is_none());
        assert_eq!(input.total_amount, None);
        assert_eq!(input.payment_id, None);
    }

    #[test]
    fn non_object_cart_element_becomes_an_empty_entry() {
        let input: CreateOrderInput = serde_json::from_value(json!({
            "cart": [{ "id": "B1", "name": "Book", "price": 100, "quantity": "2" }, 7]
        }))
        .unwrap();

        assert_eq!(input.cart.len(), 2);
        assert_eq!(input.cart[0].id.as_deref(), Some("B1"));
        assert_eq!(input.cart[0].quantity, None, "string quantity is absent");
        assert_eq!(input.cart[1].id, None);
    }

    #[test]
    fn well_typed_fields_pass_through() {
        let input: CreateOrderInput = serde_json::from_value(json!({
            "orderId": "O1",
            "totalAmount": 200,
            "formData": { "name": "A", "city": 9 }
        }))
        .unwrap();

        assert_eq!(input.order_id.as_deref(), Some("O1"));
        assert_eq!(input.total_amount, Some(200.0));
        let form = input.form_data.unwrap();
        assert_eq!(form.name.as_deref(), Some("A"));
        assert_eq!(form.city, None, "wrong-typed city is absent");
    }
}
