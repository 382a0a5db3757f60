//! Checkout errors.

use thiserror::Error;

use dhaba::draft::DraftError;

use crate::domain::orders::OrdersServiceError;

/// Errors raised while placing an order. Validation failures never leave
/// the client; submission failures leave the cart untouched.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Submission attempted with an empty cart; send the user back to
    /// review the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Required contact fields are blank.
    #[error("customer name and phone are required")]
    MissingContactDetails,

    /// Delivery order without a delivery address.
    #[error("delivery orders require a delivery address")]
    MissingDeliveryAddress,

    /// The order-acceptance service failed or refused the order.
    #[error(transparent)]
    Submission(#[from] OrdersServiceError),
}

impl From<DraftError> for CheckoutError {
    fn from(error: DraftError) -> Self {
        match error {
            DraftError::EmptyCart => Self::EmptyCart,
            DraftError::MissingContactDetails => Self::MissingContactDetails,
            DraftError::MissingDeliveryAddress => Self::MissingDeliveryAddress,
        }
    }
}
