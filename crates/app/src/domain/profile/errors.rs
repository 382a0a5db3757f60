//! Profile service errors.

use thiserror::Error;

/// Errors from the profile collaborator.
///
/// A missing profile row is distinct from a transport failure so callers
/// can skip pre-fill without treating it as fatal.
#[derive(Debug, Error)]
pub enum ProfileServiceError {
    /// The request carried no valid session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The user has no saved profile row yet.
    #[error("profile not found")]
    NotFound,

    /// Non-success response from the profile service.
    #[error("unexpected profile service response: {0}")]
    UnexpectedResponse(String),

    /// HTTP transport or deserialization failure.
    #[error("profile request failed")]
    Http(#[from] reqwest::Error),
}
