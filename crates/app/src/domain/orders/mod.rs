//! Order-acceptance collaborator.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::OrdersServiceError;
pub use models::{OrderReceipt, OrderRequest, OrderRequestItem};
pub use service::*;
