//! Menu service errors.

use thiserror::Error;

/// Errors from the menu/restaurant lookup collaborator.
#[derive(Debug, Error)]
pub enum MenuServiceError {
    /// Restaurant or menu not found.
    #[error("restaurant not found")]
    NotFound,

    /// Non-success response from the menu service.
    #[error("unexpected menu service response: {0}")]
    UnexpectedResponse(String),

    /// HTTP transport or deserialization failure.
    #[error("menu service request failed")]
    Http(#[from] reqwest::Error),
}
