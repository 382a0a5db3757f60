//! Dhaba storefront application: collaborator clients, the persisted cart
//! store and checkout orchestration.

pub mod config;
pub mod context;
pub mod domain;
pub mod images;
pub mod logging;
pub mod session;
pub mod store;
