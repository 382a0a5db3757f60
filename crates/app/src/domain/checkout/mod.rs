//! Checkout orchestration.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CheckoutError;
pub use models::ContactDetails;
pub use service::CheckoutService;
