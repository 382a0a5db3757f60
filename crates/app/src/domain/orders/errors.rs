//! Orders service errors.

use thiserror::Error;

/// Errors from the order-acceptance collaborator. None of these clear the
/// cart; the user decides whether to resubmit.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// The service answered but refused to create the order.
    #[error("the order was rejected by the order service")]
    Rejected,

    /// Malformed or non-success response.
    #[error("unexpected order service response: {0}")]
    UnexpectedResponse(String),

    /// HTTP transport or deserialization failure.
    #[error("order submission failed")]
    Http(#[from] reqwest::Error),
}
