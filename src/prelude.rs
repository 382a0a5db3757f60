//! Dhaba prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, MAX_QUANTITY, MIN_QUANTITY},
    draft::{DraftError, OrderDraft},
    pricing::{DELIVERY_FEE, OrderTotals, OrderType, tax_rate},
};
