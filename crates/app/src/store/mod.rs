//! Cart store
//!
//! Explicitly owned container for the active cart and the display-mode
//! flag, mirrored to client-side storage across page navigations.

mod storage;

pub use storage::{JsonFileStorage, StateStorage, StorageError};

use serde::{Deserialize, Serialize};
use tracing::warn;

use dhaba::cart::{Cart, CartError, CartLine};

/// Which storefront the UI is browsing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// General restaurant browsing.
    #[default]
    Restaurant,
    /// The takeaway-only canteen.
    Canteen,
}

/// The state mirrored to storage: the active cart plus the display mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub cart: Cart,
    #[serde(default)]
    pub mode: AppMode,
}

/// Owned cart state container, constructed at session start and injected
/// into the views that need it.
///
/// Every mutation is mirrored to the configured storage. The mirror is
/// best-effort: a failed save is logged and the in-memory state stays
/// authoritative.
pub struct CartStore {
    state: StoreState,
    storage: Option<Box<dyn StateStorage>>,
}

impl CartStore {
    /// Store with no persistence mirror.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: StoreState::default(),
            storage: None,
        }
    }

    /// Store backed by `storage`. Missing or unreadable state loads as an
    /// empty cart.
    #[must_use]
    pub fn with_storage(storage: Box<dyn StateStorage>) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => state,
            Ok(None) => StoreState::default(),
            Err(error) => {
                warn!("discarding unreadable cart state: {error}");
                StoreState::default()
            }
        };

        Self {
            state,
            storage: Some(storage),
        }
    }

    /// The active cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    /// The persisted display mode.
    #[must_use]
    pub fn mode(&self) -> AppMode {
        self.state.mode
    }

    /// Add a line to the cart and mirror the result.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DifferentRestaurant`] when the line comes from
    /// another restaurant; the cart and mirror are untouched.
    pub fn add_item(&mut self, line: CartLine) -> Result<(), CartError> {
        self.state.cart.add_line(line)?;
        self.persist();

        Ok(())
    }

    /// Adjust a line's quantity by `delta` and mirror the result.
    pub fn update_quantity(&mut self, item_id: &str, delta: i64) {
        self.state.cart.update_quantity(item_id, delta);
        self.persist();
    }

    /// Remove a line and mirror the result.
    pub fn remove_item(&mut self, item_id: &str) {
        self.state.cart.remove_line(item_id);
        self.persist();
    }

    /// Empty the cart and mirror the result.
    pub fn clear_cart(&mut self) {
        self.state.cart.clear();
        self.persist();
    }

    /// Switch the display mode and mirror the result.
    pub fn set_mode(&mut self, mode: AppMode) {
        self.state.mode = mode;
        self.persist();
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.state.cart.total_items()
    }

    /// Cart subtotal in minor units.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.state.cart.subtotal()
    }

    fn persist(&self) {
        if let Some(storage) = &self.storage {
            if let Err(error) = storage.save(&self.state) {
                warn!("failed to mirror cart state: {error}");
            }
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
