//! Profile collaborator.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::ProfileServiceError;
pub use models::Profile;
pub use service::*;
