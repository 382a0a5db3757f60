//! Menu service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};

use crate::domain::menu::{
    errors::MenuServiceError,
    models::{MenuView, Restaurant},
};

/// Read-only access to the restaurant and menu catalogue.
#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// List restaurants, optionally filtered to canteen or non-canteen
    /// vendors.
    async fn restaurants(&self, canteen: Option<bool>)
    -> Result<Vec<Restaurant>, MenuServiceError>;

    /// Fetch one restaurant together with its menu items.
    async fn menu(&self, restaurant_id: &str) -> Result<MenuView, MenuServiceError>;
}

/// HTTP client for the menu lookup service.
#[derive(Debug, Clone)]
pub struct HttpMenuService {
    base_url: String,
    http: Client,
}

impl HttpMenuService {
    /// Create a new client against the given API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }
}

#[async_trait]
impl MenuService for HttpMenuService {
    async fn restaurants(
        &self,
        canteen: Option<bool>,
    ) -> Result<Vec<Restaurant>, MenuServiceError> {
        let mut request = self.http.get(format!("{}/api/restaurants", self.base_url));

        if let Some(canteen) = canteen {
            request = request.query(&[("canteen", canteen)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(MenuServiceError::UnexpectedResponse(format!(
                "restaurant listing failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }

    async fn menu(&self, restaurant_id: &str) -> Result<MenuView, MenuServiceError> {
        let response = self
            .http
            .get(format!("{}/api/menu/{restaurant_id}", self.base_url))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(menu_failure(status, &text));
        }

        Ok(response.json().await?)
    }
}

/// Map a non-success menu response onto the error taxonomy.
fn menu_failure(status: StatusCode, text: &str) -> MenuServiceError {
    match status {
        StatusCode::NOT_FOUND => MenuServiceError::NotFound,
        _ => MenuServiceError::UnexpectedResponse(format!(
            "menu fetch failed with status {status}: {text}"
        )),
    }
}
