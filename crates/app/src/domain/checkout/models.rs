//! Checkout models

/// Contact fields pre-filled into the checkout form.
///
/// Blank fields mean nothing was available; the user fills them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub delivery_address: String,
}
