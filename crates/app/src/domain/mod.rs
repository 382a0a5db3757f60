//! Storefront domains: menu browsing, order submission, profile and
//! checkout orchestration.

pub mod checkout;
pub mod menu;
pub mod orders;
pub mod profile;
