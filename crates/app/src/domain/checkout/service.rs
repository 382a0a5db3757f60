//! Checkout service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use dhaba::{
    draft::OrderDraft,
    pricing::{OrderTotals, OrderType},
};

use crate::{
    domain::{
        checkout::{errors::CheckoutError, models::ContactDetails},
        orders::{
            models::{OrderReceipt, OrderRequest},
            service::OrdersService,
        },
        profile::{errors::ProfileServiceError, service::ProfileService},
    },
    session::Session,
    store::CartStore,
};

/// Orchestrates checkout: contact pre-fill, validation and the single
/// order-submission request per user-initiated checkout action.
pub struct CheckoutService {
    orders: Arc<dyn OrdersService>,
    profile: Arc<dyn ProfileService>,
}

impl CheckoutService {
    /// Create a service over the order-acceptance and profile collaborators.
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>, profile: Arc<dyn ProfileService>) -> Self {
        Self { orders, profile }
    }

    /// One-time fetch-and-populate of the checkout contact fields.
    ///
    /// Unauthenticated visitors get blank fields. For signed-in users a
    /// missing profile row, a stale session or a transport failure all
    /// degrade to pre-filling the session email only; checkout itself is
    /// never blocked by a pre-fill failure.
    pub async fn prefill(&self, session: Option<&Session>) -> ContactDetails {
        let Some(session) = session else {
            return ContactDetails::default();
        };

        let customer_email = session.email.clone().unwrap_or_default();

        match self.profile.fetch(session).await {
            Ok(profile) => ContactDetails {
                customer_name: profile.name.unwrap_or_default(),
                customer_phone: profile.phone.unwrap_or_default(),
                customer_email,
                delivery_address: profile.address.unwrap_or_default(),
            },
            Err(ProfileServiceError::NotFound | ProfileServiceError::NotAuthenticated) => {
                debug!("no saved profile; pre-filling session email only");

                ContactDetails {
                    customer_email,
                    ..ContactDetails::default()
                }
            }
            Err(error) => {
                warn!("profile fetch failed, skipping pre-fill: {error}");

                ContactDetails {
                    customer_email,
                    ..ContactDetails::default()
                }
            }
        }
    }

    /// Totals for the draft as it would be charged, with canteen carts
    /// forced to takeaway.
    #[must_use]
    pub fn totals(&self, store: &CartStore, draft: &OrderDraft) -> OrderTotals {
        OrderTotals::for_cart(store.cart(), effective_order_type(store, draft.order_type))
    }

    /// Validate the draft and submit exactly one order creation request.
    ///
    /// On acceptance the cart is cleared and the receipt returned; the
    /// caller navigates to the confirmation view keyed by its order id. On
    /// any failure the cart is left untouched so the user can resubmit
    /// explicitly. Holding the store by `&mut` for the duration of the
    /// call keeps a second submission from starting while one is in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns a validation variant before any request is sent, or
    /// [`CheckoutError::Submission`] when the collaborator fails or
    /// rejects the order.
    pub async fn place_order(
        &self,
        store: &mut CartStore,
        draft: &OrderDraft,
    ) -> Result<OrderReceipt, CheckoutError> {
        let order_type = effective_order_type(store, draft.order_type);
        let draft = OrderDraft {
            order_type,
            ..draft.clone()
        };

        draft.validate(store.cart())?;

        let request = OrderRequest::from_draft(store.cart(), &draft);
        let receipt = self.orders.submit(request).await?;

        store.clear_cart();
        info!(order_id = %receipt.order_id, "order placed");

        Ok(receipt)
    }
}

/// Canteens are takeaway-only vendors; any delivery selection is overridden.
fn effective_order_type(store: &CartStore, requested: OrderType) -> OrderType {
    if store.cart().is_canteen() {
        OrderType::Takeaway
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use dhaba::cart::CartLine;

    use crate::domain::{
        orders::{MockOrdersService, OrdersServiceError},
        profile::{MockProfileService, Profile, ProfileServiceError},
    };

    use super::*;

    fn line(item_id: &str, restaurant_name: &str) -> CartLine {
        CartLine {
            item_id: item_id.to_owned(),
            name: format!("Dish {item_id}"),
            unit_price: 120_00,
            quantity: 2,
            restaurant_id: "r1".to_owned(),
            restaurant_name: restaurant_name.to_owned(),
            category: None,
            image_url: None,
        }
    }

    fn filled_store(restaurant_name: &str) -> TestResult<CartStore> {
        let mut store = CartStore::new();
        store.add_item(line("dosa", restaurant_name))?;

        Ok(store)
    }

    fn draft(order_type: OrderType, address: Option<&str>) -> OrderDraft {
        OrderDraft {
            customer_name: "Asha Rao".to_owned(),
            customer_phone: "+91 98765 43210".to_owned(),
            customer_email: Some("asha@example.com".to_owned()),
            order_type,
            delivery_address: address.map(str::to_owned),
            notes: None,
        }
    }

    fn receipt(order_id: &str) -> OrderReceipt {
        OrderReceipt {
            order_id: order_id.to_owned(),
            placed_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn strict_profile_mock() -> MockProfileService {
        let mut profile = MockProfileService::new();

        profile.expect_fetch().never();
        profile.expect_save().never();

        profile
    }

    fn service(orders: MockOrdersService, profile: MockProfileService) -> CheckoutService {
        CheckoutService::new(Arc::new(orders), Arc::new(profile))
    }

    fn session() -> Session {
        Session {
            user_id: "u1".to_owned(),
            name: Some("Asha Rao".to_owned()),
            email: Some("asha@example.com".to_owned()),
            image: None,
            access_token: "token".to_owned(),
        }
    }

    #[tokio::test]
    async fn successful_submission_clears_the_cart() -> TestResult {
        let mut store = filled_store("Spice Villa")?;

        let mut orders = MockOrdersService::new();
        orders
            .expect_submit()
            .once()
            .withf(|request| {
                request.restaurant_id == "r1"
                    && request.order_type == OrderType::Delivery
                    && request.delivery_address.as_deref() == Some("12 MG Road, Bengaluru")
                    && request.items.len() == 1
            })
            .return_once(|_| Ok(receipt("ord-42")));

        let result = service(orders, strict_profile_mock())
            .place_order(&mut store, &draft(OrderType::Delivery, Some("12 MG Road, Bengaluru")))
            .await?;

        assert_eq!(result.order_id, "ord-42");
        assert_eq!(store.total_items(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn blank_phone_blocks_submission_without_a_network_call() -> TestResult {
        let mut store = filled_store("Spice Villa")?;

        let mut orders = MockOrdersService::new();
        orders.expect_submit().never();

        let blank_phone = OrderDraft {
            customer_phone: String::new(),
            ..draft(OrderType::Takeaway, None)
        };

        let result = service(orders, strict_profile_mock())
            .place_order(&mut store, &blank_phone)
            .await;

        assert!(
            matches!(result, Err(CheckoutError::MissingContactDetails)),
            "expected MissingContactDetails, got {result:?}"
        );
        assert_eq!(store.total_items(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn delivery_without_address_blocks_submission() -> TestResult {
        let mut store = filled_store("Spice Villa")?;

        let mut orders = MockOrdersService::new();
        orders.expect_submit().never();

        let result = service(orders, strict_profile_mock())
            .place_order(&mut store, &draft(OrderType::Delivery, None))
            .await;

        assert!(
            matches!(result, Err(CheckoutError::MissingDeliveryAddress)),
            "expected MissingDeliveryAddress, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_blocks_submission() {
        let mut store = CartStore::new();

        let mut orders = MockOrdersService::new();
        orders.expect_submit().never();

        let result = service(orders, strict_profile_mock())
            .place_order(&mut store, &draft(OrderType::Takeaway, None))
            .await;

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[tokio::test]
    async fn rejected_submission_leaves_the_cart_untouched() -> TestResult {
        let mut store = filled_store("Spice Villa")?;

        let mut orders = MockOrdersService::new();
        orders
            .expect_submit()
            .once()
            .return_once(|_| Err(OrdersServiceError::Rejected));

        let result = service(orders, strict_profile_mock())
            .place_order(&mut store, &draft(OrderType::Takeaway, None))
            .await;

        assert!(
            matches!(
                result,
                Err(CheckoutError::Submission(OrdersServiceError::Rejected))
            ),
            "expected Submission(Rejected), got {result:?}"
        );
        assert_eq!(store.total_items(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn canteen_cart_forces_takeaway() -> TestResult {
        let mut store = filled_store("Campus Canteen")?;

        let mut orders = MockOrdersService::new();
        orders
            .expect_submit()
            .once()
            .withf(|request| {
                request.order_type == OrderType::Takeaway && request.delivery_address.is_none()
            })
            .return_once(|_| Ok(receipt("ord-7")));

        // Delivery selected, no address given: the canteen override makes
        // the draft valid and the payload takeaway.
        service(orders, strict_profile_mock())
            .place_order(&mut store, &draft(OrderType::Delivery, None))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn canteen_totals_carry_no_delivery_fee() -> TestResult {
        let store = filled_store("Campus Canteen")?;

        let totals = service(MockOrdersService::new(), strict_profile_mock())
            .totals(&store, &draft(OrderType::Delivery, None));

        assert_eq!(totals.delivery_fee, 0);

        Ok(())
    }

    #[tokio::test]
    async fn prefill_without_a_session_is_blank() {
        let mut profile = MockProfileService::new();
        profile.expect_fetch().never();
        profile.expect_save().never();

        let details = service(MockOrdersService::new(), profile)
            .prefill(None)
            .await;

        assert_eq!(details, ContactDetails::default());
    }

    #[tokio::test]
    async fn prefill_populates_from_the_saved_profile() {
        let mut profile = MockProfileService::new();
        profile.expect_save().never();
        profile.expect_fetch().once().return_once(|_| {
            Ok(Profile {
                name: Some("Asha Rao".to_owned()),
                phone: Some("+91 98765 43210".to_owned()),
                address: Some("12 MG Road, Bengaluru".to_owned()),
            })
        });

        let details = service(MockOrdersService::new(), profile)
            .prefill(Some(&session()))
            .await;

        assert_eq!(details.customer_name, "Asha Rao");
        assert_eq!(details.customer_phone, "+91 98765 43210");
        assert_eq!(details.customer_email, "asha@example.com");
        assert_eq!(details.delivery_address, "12 MG Road, Bengaluru");
    }

    #[tokio::test]
    async fn prefill_without_a_profile_row_keeps_the_session_email() {
        let mut profile = MockProfileService::new();
        profile.expect_save().never();
        profile
            .expect_fetch()
            .once()
            .return_once(|_| Err(ProfileServiceError::NotFound));

        let details = service(MockOrdersService::new(), profile)
            .prefill(Some(&session()))
            .await;

        assert_eq!(details.customer_name, "");
        assert_eq!(details.customer_email, "asha@example.com");
    }

    #[tokio::test]
    async fn prefill_failure_degrades_to_the_session_email() {
        let mut profile = MockProfileService::new();
        profile.expect_save().never();
        profile.expect_fetch().once().return_once(|_| {
            Err(ProfileServiceError::UnexpectedResponse(
                "profile fetch failed with status 500".to_owned(),
            ))
        });

        let details = service(MockOrdersService::new(), profile)
            .prefill(Some(&session()))
            .await;

        assert_eq!(details.customer_phone, "");
        assert_eq!(details.customer_email, "asha@example.com");
    }
}
