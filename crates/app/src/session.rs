//! Identity-provider session

/// The signed-in user, as issued by the identity provider.
///
/// Checkout pre-fills contact details from the profile service when a
/// session exists; everything else works without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Stable user identifier.
    pub user_id: String,
    /// Display name, when the provider shares one.
    pub name: Option<String>,
    /// Account email, when the provider shares one.
    pub email: Option<String>,
    /// Avatar URL, when the provider shares one.
    pub image: Option<String>,
    /// Bearer token presented to the profile service.
    pub access_token: String,
}
