//! Order drafts
//!
//! The validated, not-yet-submitted combination of cart, customer and
//! fulfilment details.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{cart::Cart, pricing::OrderType};

/// Validation failures for an order draft, in evaluation order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// Submission from an empty cart; the caller sends the user back to
    /// review the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Customer name or phone is blank.
    #[error("customer name and phone are required")]
    MissingContactDetails,

    /// Delivery order without a delivery address.
    #[error("delivery orders require a delivery address")]
    MissingDeliveryAddress,
}

/// Customer and fulfilment details for the cart being checked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Customer's full name. Required.
    pub customer_name: String,
    /// Customer's phone number. Required.
    pub customer_phone: String,
    /// Contact email, when the customer gave one.
    pub customer_email: Option<String>,
    /// Fulfilment choice.
    pub order_type: OrderType,
    /// Delivery address; required for delivery orders.
    pub delivery_address: Option<String>,
    /// Free-form special instructions.
    pub notes: Option<String>,
}

impl OrderDraft {
    /// Validate the draft against the cart it covers.
    ///
    /// Checks run in a fixed order and the first failure wins: empty cart,
    /// then blank contact fields, then a missing delivery address. Fields
    /// are trimmed first, so whitespace-only input counts as blank.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`DraftError`].
    pub fn validate(&self, cart: &Cart) -> Result<(), DraftError> {
        if cart.is_empty() {
            return Err(DraftError::EmptyCart);
        }

        if is_blank(&self.customer_name) || is_blank(&self.customer_phone) {
            return Err(DraftError::MissingContactDetails);
        }

        if self.order_type == OrderType::Delivery
            && !self
                .delivery_address
                .as_deref()
                .is_some_and(|address| !is_blank(address))
        {
            return Err(DraftError::MissingDeliveryAddress);
        }

        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
