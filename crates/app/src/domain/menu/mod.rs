//! Menu and restaurant lookup collaborator.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::MenuServiceError;
pub use models::{MenuItem, MenuView, Restaurant, group_by_category};
pub use service::*;
