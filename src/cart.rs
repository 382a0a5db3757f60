//! Cart
//!
//! The in-progress, unsubmitted set of items a user intends to order,
//! scoped to a single restaurant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest quantity a cart line can hold.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a cart line can hold.
pub const MAX_QUANTITY: u32 = 10;

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The cart already holds lines from a different restaurant; the caller
    /// decides whether to clear the cart and start a new one.
    #[error("cart holds items from {in_cart}; clear it to order from {offered}")]
    DifferentRestaurant {
        /// Name of the restaurant the cart currently belongs to.
        in_cart: String,
        /// Name of the restaurant the rejected line came from.
        offered: String,
    },
}

/// One entry in the active cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Opaque menu item identifier, unique per line.
    pub item_id: String,
    /// Display name of the item.
    pub name: String,
    /// Unit price in minor units.
    pub unit_price: u64,
    /// Units of this item, always within [`MIN_QUANTITY`]..=[`MAX_QUANTITY`].
    pub quantity: u32,
    /// Restaurant the item belongs to.
    pub restaurant_id: String,
    /// Display name of that restaurant.
    pub restaurant_name: String,
    /// Menu category, when the menu provides one.
    #[serde(default)]
    pub category: Option<String>,
    /// Explicit image URL, when the menu provides one.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Ordered sequence of [`CartLine`]s, all from one restaurant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the cart.
    ///
    /// A line with an `item_id` already in the cart increments that line's
    /// quantity instead of duplicating it; quantities are clamped to
    /// [`MAX_QUANTITY`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DifferentRestaurant`] when the cart is non-empty
    /// and the line comes from another restaurant. The cart is untouched.
    pub fn add_line(&mut self, line: CartLine) -> Result<(), CartError> {
        if let Some(current) = self.lines.first() {
            if current.restaurant_id != line.restaurant_id {
                return Err(CartError::DifferentRestaurant {
                    in_cart: current.restaurant_name.clone(),
                    offered: line.restaurant_name.clone(),
                });
            }
        }

        let quantity = line.quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);

        if let Some(existing) = self.lines.iter_mut().find(|l| l.item_id == line.item_id) {
            existing.quantity = existing.quantity.saturating_add(quantity).min(MAX_QUANTITY);
            return Ok(());
        }

        let mut line = line;
        line.quantity = quantity;
        self.lines.push(line);

        Ok(())
    }

    /// Adjust a line's quantity by `delta`, clamped to
    /// [`MIN_QUANTITY`]..=[`MAX_QUANTITY`].
    ///
    /// Decrementing never removes the line; an absent `item_id` is a no-op.
    pub fn update_quantity(&mut self, item_id: &str, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            let updated = i64::from(line.quantity)
                .saturating_add(delta)
                .clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY));

            line.quantity = u32::try_from(updated).unwrap_or(MIN_QUANTITY);
        }
    }

    /// Delete a line; a no-op when the `item_id` is absent.
    pub fn remove_line(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Empty the cart and reset its restaurant association. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities; 0 for an empty cart.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum over lines of `unit_price * quantity`, in minor units.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| l.unit_price * u64::from(l.quantity))
            .sum()
    }

    /// Identifier of the restaurant the cart belongs to, when non-empty.
    #[must_use]
    pub fn restaurant_id(&self) -> Option<&str> {
        self.lines.first().map(|l| l.restaurant_id.as_str())
    }

    /// Display name of the restaurant the cart belongs to, when non-empty.
    #[must_use]
    pub fn restaurant_name(&self) -> Option<&str> {
        self.lines.first().map(|l| l.restaurant_name.as_str())
    }

    /// Whether the cart belongs to the canteen, a takeaway-only vendor.
    #[must_use]
    pub fn is_canteen(&self) -> bool {
        self.lines
            .first()
            .is_some_and(|l| l.restaurant_name.contains("Canteen"))
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn line(item_id: &str, unit_price: u64, quantity: u32) -> CartLine {
        CartLine {
            item_id: item_id.to_owned(),
            name: format!("Dish {item_id}"),
            unit_price,
            quantity,
            restaurant_id: "r1".to_owned(),
            restaurant_name: "Spice Villa".to_owned(),
            category: None,
            image_url: None,
        }
    }

    fn other_restaurant_line(item_id: &str) -> CartLine {
        CartLine {
            restaurant_id: "r2".to_owned(),
            restaurant_name: "Tandoor House".to_owned(),
            ..line(item_id, 100, 1)
        }
    }

    #[test]
    fn total_items_sums_quantities_of_distinct_lines() -> TestResult {
        let mut cart = Cart::new();

        cart.add_line(line("a", 100, 2))?;
        cart.add_line(line("b", 200, 3))?;
        cart.add_line(line("c", 300, 1))?;

        assert_eq!(cart.total_items(), 6);
        assert_eq!(cart.len(), 3);

        Ok(())
    }

    #[test]
    fn adding_same_item_merges_and_clamps_quantity() -> TestResult {
        let mut cart = Cart::new();

        cart.add_line(line("a", 100, 6))?;
        cart.add_line(line("a", 100, 7))?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), u64::from(MAX_QUANTITY));

        Ok(())
    }

    #[test]
    fn adding_same_item_below_cap_sums_quantities() -> TestResult {
        let mut cart = Cart::new();

        cart.add_line(line("a", 100, 2))?;
        cart.add_line(line("a", 100, 3))?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 5);

        Ok(())
    }

    #[test]
    fn add_clamps_out_of_range_incoming_quantities() -> TestResult {
        let mut cart = Cart::new();

        cart.add_line(line("a", 100, 0))?;
        cart.add_line(line("b", 100, 15))?;

        let quantities: Vec<u32> = cart.lines().iter().map(|l| l.quantity).collect();

        assert_eq!(quantities, vec![MIN_QUANTITY, MAX_QUANTITY]);

        Ok(())
    }

    #[test]
    fn update_quantity_never_leaves_valid_range() -> TestResult {
        let mut cart = Cart::new();
        cart.add_line(line("a", 100, 5))?;

        cart.update_quantity("a", 100);
        assert_eq!(cart.total_items(), u64::from(MAX_QUANTITY));

        cart.update_quantity("a", -100);
        assert_eq!(cart.total_items(), u64::from(MIN_QUANTITY));

        cart.update_quantity("a", i64::MIN);
        assert_eq!(cart.total_items(), u64::from(MIN_QUANTITY));

        Ok(())
    }

    #[test]
    fn decrement_alone_never_removes_a_line() -> TestResult {
        let mut cart = Cart::new();
        cart.add_line(line("a", 100, 1))?;

        cart.update_quantity("a", -1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 1);

        Ok(())
    }

    #[test]
    fn update_quantity_for_absent_item_is_a_noop() -> TestResult {
        let mut cart = Cart::new();
        cart.add_line(line("a", 100, 2))?;

        cart.update_quantity("missing", 5);

        assert_eq!(cart.total_items(), 2);

        Ok(())
    }

    #[test]
    fn subtotal_is_invariant_under_add_reordering() -> TestResult {
        let mut forward = Cart::new();
        forward.add_line(line("a", 100, 2))?;
        forward.add_line(line("b", 250, 1))?;
        forward.add_line(line("c", 75, 4))?;

        let mut reversed = Cart::new();
        reversed.add_line(line("c", 75, 4))?;
        reversed.add_line(line("b", 250, 1))?;
        reversed.add_line(line("a", 100, 2))?;

        assert_eq!(forward.subtotal(), reversed.subtotal());
        assert_eq!(forward.subtotal(), 100 * 2 + 250 + 75 * 4);

        Ok(())
    }

    #[test]
    fn clear_is_idempotent() -> TestResult {
        let mut cart = Cart::new();
        cart.add_line(line("a", 100, 2))?;

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0);

        Ok(())
    }

    #[test]
    fn clear_resets_restaurant_association() -> TestResult {
        let mut cart = Cart::new();
        cart.add_line(line("a", 100, 1))?;

        cart.clear();

        assert_eq!(cart.restaurant_id(), None);
        assert!(cart.add_line(other_restaurant_line("x")).is_ok());

        Ok(())
    }

    #[test]
    fn adding_from_another_restaurant_is_rejected() -> TestResult {
        let mut cart = Cart::new();
        cart.add_line(line("a", 100, 1))?;

        let result = cart.add_line(other_restaurant_line("x"));

        assert_eq!(
            result,
            Err(CartError::DifferentRestaurant {
                in_cart: "Spice Villa".to_owned(),
                offered: "Tandoor House".to_owned(),
            })
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.restaurant_id(), Some("r1"));

        Ok(())
    }

    #[test]
    fn remove_line_deletes_and_is_noop_when_absent() -> TestResult {
        let mut cart = Cart::new();
        cart.add_line(line("a", 100, 2))?;
        cart.add_line(line("b", 200, 1))?;

        cart.remove_line("a");
        assert_eq!(cart.len(), 1);

        cart.remove_line("missing");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 1);

        Ok(())
    }

    #[test]
    fn canteen_cart_is_detected_by_restaurant_name() -> TestResult {
        let mut cart = Cart::new();
        cart.add_line(CartLine {
            restaurant_name: "Campus Canteen".to_owned(),
            ..line("a", 100, 1)
        })?;

        assert!(cart.is_canteen());

        let mut regular = Cart::new();
        regular.add_line(line("a", 100, 1))?;

        assert!(!regular.is_canteen());
        assert!(!Cart::new().is_canteen());

        Ok(())
    }
}
