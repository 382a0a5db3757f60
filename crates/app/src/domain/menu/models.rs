//! Menu models

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use dhaba::cart::CartLine;

/// Restaurant summary returned by the lookup service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub operating_hours: Option<String>,
    pub rating: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Canteens are fixed takeaway-only vendors.
    #[serde(default)]
    pub is_canteen: bool,
}

/// A single dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in major currency units, as served by the menu API.
    pub price: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_available: bool,
}

impl MenuItem {
    /// Price in minor units, rounded to the nearest unit.
    #[must_use]
    pub fn price_minor(&self) -> u64 {
        (self.price * Decimal::ONE_HUNDRED)
            .round_dp(0)
            .to_u64()
            .unwrap_or(0)
    }

    /// Build a cart line for `quantity` units of this item.
    #[must_use]
    pub fn to_cart_line(&self, restaurant: &Restaurant, quantity: u32) -> CartLine {
        CartLine {
            item_id: self.item_id.clone(),
            name: self.name.clone(),
            unit_price: self.price_minor(),
            quantity,
            restaurant_id: restaurant.restaurant_id.clone(),
            restaurant_name: restaurant.name.clone(),
            category: self.category.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Restaurant plus its menu, as served by `GET /api/menu/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub restaurant: Restaurant,
    pub menu_items: Vec<MenuItem>,
}

/// Group menu items by category, preserving first-appearance order.
///
/// Items without a category fall under `"Other"`.
#[must_use]
pub fn group_by_category(items: &[MenuItem]) -> Vec<(String, Vec<&MenuItem>)> {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: FxHashMap<String, Vec<&MenuItem>> = FxHashMap::default();

    for item in items {
        let category = item
            .category
            .clone()
            .unwrap_or_else(|| "Other".to_owned());

        if !grouped.contains_key(&category) {
            order.push(category.clone());
        }

        grouped.entry(category).or_default().push(item);
    }

    order
        .into_iter()
        .map(|category| {
            let items = grouped.remove(&category).unwrap_or_default();
            (category, items)
        })
        .collect()
}
