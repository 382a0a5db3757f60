//! Order wire models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dhaba::{
    cart::{Cart, CartLine},
    draft::OrderDraft,
    pricing::OrderType,
};

/// One cart line on the order payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequestItem {
    pub id: String,
    pub quantity: u32,
    /// Unit price in major units, as the order API expects.
    pub price: Decimal,
}

impl From<&CartLine> for OrderRequestItem {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.item_id.clone(),
            quantity: line.quantity,
            price: Decimal::from(line.unit_price) / Decimal::ONE_HUNDRED,
        }
    }
}

/// Payload for `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    /// Empty string when the customer gave no email.
    pub customer_email: String,
    pub restaurant_id: String,
    pub order_type: OrderType,
    /// `null` for takeaway orders.
    pub delivery_address: Option<String>,
    pub notes: String,
    pub items: Vec<OrderRequestItem>,
}

impl OrderRequest {
    /// Assemble the payload from a validated draft and the cart it covers.
    #[must_use]
    pub fn from_draft(cart: &Cart, draft: &OrderDraft) -> Self {
        Self {
            customer_name: draft.customer_name.clone(),
            customer_phone: draft.customer_phone.clone(),
            customer_email: draft.customer_email.clone().unwrap_or_default(),
            restaurant_id: cart.restaurant_id().unwrap_or_default().to_owned(),
            order_type: draft.order_type,
            delivery_address: match draft.order_type {
                OrderType::Delivery => draft.delivery_address.clone(),
                OrderType::Takeaway => None,
            },
            notes: draft.notes.clone().unwrap_or_default(),
            items: cart.lines().iter().map(OrderRequestItem::from).collect(),
        }
    }
}

/// Response body from the order-acceptance service.
#[derive(Debug, Deserialize)]
pub(crate) struct OrderResponse {
    pub success: bool,
    #[serde(default)]
    pub order: Option<AcceptedOrder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AcceptedOrder {
    pub order_id: String,
}

/// Confirmation for a durably created order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    /// Identifier issued by the order-acceptance service.
    pub order_id: String,
    /// Client-side time the confirmation was received.
    pub placed_at: Timestamp,
}
