//! Checkout submission validation
//!
//! Converts the all-optional wire input into a fully-typed
//! [`CheckoutSubmission`], or reports the first failing check. Checks run in
//! a fixed order and the first failure wins, so callers always see the most
//! fundamental problem with their payload.

use super::models::{
    CartItemInput, CheckoutSubmission, CreateOrderInput, LineItem, ShippingForm, ShippingFormInput,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Rejection reasons for a checkout submission, in check order.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// `orderId`, `cart`, `formData` or `paymentId` missing or empty.
    #[error("missing required order data")]
    MissingOrderData,

    /// A required shipping-form field is missing or empty.
    #[error("incomplete shipping details")]
    IncompleteShippingDetails,

    /// A cart entry is missing its identity or has a non-finite price or a
    /// non-positive quantity. Carries the index of the first offender.
    #[error("invalid cart item data")]
    InvalidCartItem { index: usize },

    /// `totalAmount` missing, non-finite or negative.
    #[error("total amount must be a valid non-negative number")]
    InvalidTotalAmount,
}

impl ValidationError {
    /// Extra context attached under `details` in the error response.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::InvalidCartItem { index } => {
                Some(json!(format!("cart item at index {index} is invalid")))
            }
            _ => None,
        }
    }
}

/// Runs every check from the contract and produces the validated submission.
pub fn validate(input: CreateOrderInput) -> Result<CheckoutSubmission, ValidationError> {
    let order_id = non_empty(input.order_id).ok_or(ValidationError::MissingOrderData)?;
    if input.cart.is_empty() {
        return Err(ValidationError::MissingOrderData);
    }
    let form_data = input.form_data.ok_or(ValidationError::MissingOrderData)?;
    let payment_id = non_empty(input.payment_id).ok_or(ValidationError::MissingOrderData)?;

    let form = validate_form(form_data)?;

    let cart = input
        .cart
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            validate_item(item).ok_or(ValidationError::InvalidCartItem { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_amount = match input.total_amount {
        Some(total) if total.is_finite() && total >= 0.0 => total,
        _ => return Err(ValidationError::InvalidTotalAmount),
    };

    Ok(CheckoutSubmission {
        order_id,
        cart,
        form,
        total_amount,
        shipping_cost: input.shipping_cost.unwrap_or(0.0),
        coupon_discount: input.coupon_discount.unwrap_or(0.0),
        payment_id,
    })
}

fn validate_form(form: ShippingFormInput) -> Result<ShippingForm, ValidationError> {
    Ok(ShippingForm {
        name: non_empty(form.name).ok_or(ValidationError::IncompleteShippingDetails)?,
        email: non_empty(form.email).ok_or(ValidationError::IncompleteShippingDetails)?,
        phone: non_empty(form.phone).ok_or(ValidationError::IncompleteShippingDetails)?,
        address: non_empty(form.address).ok_or(ValidationError::IncompleteShippingDetails)?,
        city: form.city.filter(|c| !c.is_empty()),
        pincode: non_empty(form.pincode).ok_or(ValidationError::IncompleteShippingDetails)?,
        state: non_empty(form.state).ok_or(ValidationError::IncompleteShippingDetails)?,
    })
}

fn validate_item(item: CartItemInput) -> Option<LineItem> {
    let id = non_empty(item.id)?;
    let name = non_empty(item.name)?;
    let price = item.price.filter(|p| p.is_finite())?;
    let quantity = item.quantity.filter(|q| q.is_finite() && *q > 0.0)?;
    Some(LineItem {
        id,
        name,
        price,
        quantity,
    })
}

/// Treats `None` and `""` alike, mirroring the truthiness checks of the
/// storefront contract.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::models::{CartItemInput, CreateOrderInput, ShippingFormInput};

    fn valid_form() -> ShippingFormInput {
        ShippingFormInput {
            name: Some("A".into()),
            email: Some("a@x.com".into()),
            phone: Some("123".into()),
            address: Some("addr".into()),
            city: None,
            pincode: Some("110001".into()),
            state: Some("DL".into()),
        }
    }

    fn valid_item() -> CartItemInput {
        CartItemInput {
            id: Some("B1".into()),
            name: Some("Book".into()),
            price: Some(100.0),
            quantity: Some(2.0),
        }
    }

    fn valid_input() -> CreateOrderInput {
        CreateOrderInput {
            order_id: Some("O1".into()),
            cart: vec![valid_item()],
            form_data: Some(valid_form()),
            total_amount: Some(200.0),
            shipping_cost: None,
            coupon_discount: None,
            payment_id: Some("P1".into()),
            delivery_days: None,
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        let submission = validate(valid_input()).unwrap();
        assert_eq!(submission.order_id, "O1");
        assert_eq!(submission.cart.len(), 1);
        assert_eq!(submission.cart[0].quantity, 2.0);
        assert_eq!(submission.shipping_cost, 0.0);
        assert_eq!(submission.coupon_discount, 0.0);
    }

    #[test]
    fn rejects_missing_order_id() {
        let mut input = valid_input();
        input.order_id = None;
        assert_eq!(validate(input), Err(ValidationError::MissingOrderData));

        let mut input = valid_input();
        input.order_id = Some(String::new());
        assert_eq!(validate(input), Err(ValidationError::MissingOrderData));
    }

    #[test]
    fn rejects_empty_cart_and_missing_form_and_payment() {
        let mut input = valid_input();
        input.cart.clear();
        assert_eq!(validate(input), Err(ValidationError::MissingOrderData));

        let mut input = valid_input();
        input.form_data = None;
        assert_eq!(validate(input), Err(ValidationError::MissingOrderData));

        let mut input = valid_input();
        input.payment_id = None;
        assert_eq!(validate(input), Err(ValidationError::MissingOrderData));
    }

    #[test]
    fn rejects_incomplete_shipping_details() {
        let mut input = valid_input();
        let mut form = valid_form();
        form.pincode = None;
        input.form_data = Some(form);
        assert_eq!(
            validate(input),
            Err(ValidationError::IncompleteShippingDetails)
        );
    }

    #[test]
    fn city_is_optional() {
        let mut input = valid_input();
        let mut form = valid_form();
        form.city = Some("Delhi".into());
        input.form_data = Some(form);
        let submission = validate(input).unwrap();
        assert_eq!(submission.form.city.as_deref(), Some("Delhi"));
    }

    #[test]
    fn rejects_invalid_cart_items_and_reports_first_offender() {
        let mut input = valid_input();
        input.cart.push(CartItemInput {
            quantity: Some(0.0),
            ..valid_item()
        });
        input.cart.push(CartItemInput {
            price: None,
            ..valid_item()
        });
        assert_eq!(
            validate(input),
            Err(ValidationError::InvalidCartItem { index: 1 })
        );
    }

    #[test]
    fn rejects_non_positive_quantity_and_missing_identity() {
        for item in [
            CartItemInput {
                quantity: Some(-1.0),
                ..valid_item()
            },
            CartItemInput {
                id: None,
                ..valid_item()
            },
            CartItemInput {
                name: Some(String::new()),
                ..valid_item()
            },
            CartItemInput {
                price: None,
                ..valid_item()
            },
        ] {
            let mut input = valid_input();
            input.cart = vec![item];
            assert_eq!(
                validate(input),
                Err(ValidationError::InvalidCartItem { index: 0 })
            );
        }
    }

    #[test]
    fn rejects_non_finite_price_and_quantity() {
        for item in [
            CartItemInput {
                price: Some(f64::NAN),
                ..valid_item()
            },
            CartItemInput {
                price: Some(f64::INFINITY),
                ..valid_item()
            },
            CartItemInput {
                quantity: Some(f64::NAN),
                ..valid_item()
            },
            CartItemInput {
                quantity: Some(f64::INFINITY),
                ..valid_item()
            },
        ] {
            let mut input = valid_input();
            input.cart = vec![item];
            assert_eq!(
                validate(input),
                Err(ValidationError::InvalidCartItem { index: 0 })
            );
        }
    }

    #[test]
    fn rejects_non_finite_total() {
        for total in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut input = valid_input();
            input.total_amount = Some(total);
            assert_eq!(validate(input), Err(ValidationError::InvalidTotalAmount));
        }
    }

    #[test]
    fn rejects_negative_or_missing_total() {
        let mut input = valid_input();
        input.total_amount = Some(-1.0);
        assert_eq!(validate(input), Err(ValidationError::InvalidTotalAmount));

        let mut input = valid_input();
        input.total_amount = None;
        assert_eq!(validate(input), Err(ValidationError::InvalidTotalAmount));
    }

    #[test]
    fn accepts_zero_total() {
        let mut input = valid_input();
        input.total_amount = Some(0.0);
        let submission = validate(input).unwrap();
        assert_eq!(submission.total_amount, 0.0);
    }

    #[test]
    fn checks_run_in_order_first_failure_wins() {
        // Missing payment id outranks the broken cart item.
        let mut input = valid_input();
        input.payment_id = None;
        input.cart = vec![CartItemInput::default()];
        assert_eq!(validate(input), Err(ValidationError::MissingOrderData));
    }
}
