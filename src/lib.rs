//! Dhaba
//!
//! Dhaba is the cart and checkout domain for a food-ordering storefront:
//! single-restaurant carts, fixed-point order totals and pre-submission
//! validation of order drafts.
//!
//! All monetary values are unsigned minor units (paise); rate arithmetic is
//! done in decimal space and rounded back to the nearest minor unit.

pub mod cart;
pub mod draft;
pub mod prelude;
pub mod pricing;
