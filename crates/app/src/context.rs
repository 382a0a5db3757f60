//! Storefront context

use std::sync::Arc;

use reqwest::Client;

use crate::domain::{
    menu::{HttpMenuService, MenuService},
    orders::{HttpOrdersService, OrdersService},
    profile::{HttpProfileService, ProfileService},
};

/// Shared handles to the external collaborators.
#[derive(Clone)]
pub struct StorefrontContext {
    pub menu: Arc<dyn MenuService>,
    pub orders: Arc<dyn OrdersService>,
    pub profile: Arc<dyn ProfileService>,
}

impl StorefrontContext {
    /// Build HTTP-backed services against one API base URL, sharing a
    /// single connection pool.
    #[must_use]
    pub fn from_base_url(base_url: &str) -> Self {
        let http = Client::new();

        Self {
            menu: Arc::new(HttpMenuService::new(base_url, http.clone())),
            orders: Arc::new(HttpOrdersService::new(base_url, http.clone())),
            profile: Arc::new(HttpProfileService::new(base_url, http)),
        }
    }
}
