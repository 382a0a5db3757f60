//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use reqwest::Client;

use crate::domain::orders::{
    errors::OrdersServiceError,
    models::{OrderReceipt, OrderRequest, OrderResponse},
};

/// The external system of record that durably creates orders.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Submit one order creation request.
    ///
    /// Never retries; the caller decides whether to resubmit after a
    /// failure.
    async fn submit(&self, request: OrderRequest) -> Result<OrderReceipt, OrdersServiceError>;
}

/// HTTP client for the order-acceptance service.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    base_url: String,
    http: Client,
}

impl HttpOrdersService {
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
impl OrdersService for HttpOrdersService {
    async fn submit(&self, request: OrderRequest) -> Result<OrderReceipt, OrdersServiceError> {
        let response = self
            .http
            .post(format!("{}/api/orders", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(OrdersServiceError::UnexpectedResponse(format!(
                "order submission failed with status {status}: {text}"
            )));
        }

        let parsed: OrderResponse = response.json().await?;

        if !parsed.success {
            return Err(OrdersServiceError::Rejected);
        }

        let order = parsed.order.ok_or_else(|| {
            OrdersServiceError::UnexpectedResponse(
                "success response carried no order identifier".to_owned(),
            )
        })?;

        Ok(OrderReceipt {
            order_id: order.order_id,
            placed_at: Timestamp::now(),
        })
    }
}
