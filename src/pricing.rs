//! Order pricing
//!
//! Fixed-point computation of the monetary breakdown shown to the user and
//! sent to the order-acceptance service.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// Flat delivery fee in minor units (40.00), independent of distance or weight.
pub const DELIVERY_FEE: u64 = 40_00;

/// Flat tax rate applied to the subtotal only, never to the delivery fee.
#[must_use]
pub fn tax_rate() -> Percentage {
    Percentage::from(0.05)
}

/// Fulfilment choice for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Delivered to the customer's address; carries the flat delivery fee.
    Delivery,
    /// Collected by the customer; no delivery fee.
    Takeaway,
}

impl OrderType {
    /// Delivery fee charged for this fulfilment choice, in minor units.
    #[must_use]
    pub fn delivery_fee(self) -> u64 {
        match self {
            Self::Delivery => DELIVERY_FEE,
            Self::Takeaway => 0,
        }
    }
}

/// Monetary breakdown for an order, all values in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of `unit_price * quantity` over the cart lines.
    pub subtotal: u64,
    /// Tax on the subtotal, rounded to the nearest minor unit.
    pub tax: u64,
    /// Flat fee for delivery orders, zero for takeaway.
    pub delivery_fee: u64,
    /// `subtotal + tax + delivery_fee`.
    pub total: u64,
}

impl OrderTotals {
    /// Compute the breakdown for a cart and fulfilment choice.
    #[must_use]
    pub fn for_cart(cart: &Cart, order_type: OrderType) -> Self {
        Self::from_subtotal(cart.subtotal(), order_type)
    }

    /// Compute the breakdown from a pre-computed subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: u64, order_type: OrderType) -> Self {
        let tax = tax_on(subtotal);
        let delivery_fee = order_type.delivery_fee();

        Self {
            subtotal,
            tax,
            delivery_fee,
            total: subtotal + tax + delivery_fee,
        }
    }
}

/// Tax on a subtotal, in minor units.
fn tax_on(subtotal: u64) -> u64 {
    // Rate math in decimal space; integer division would truncate.
    let taxed = tax_rate() * Decimal::from(subtotal);

    taxed
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}
