//! # Store Facade
//!
//! Bundles the five state containers and the configuration into one handle,
//! the Rust counterpart of the original single shared context.
//!
//! ## Usage
//! ```rust,ignore
//! use pharmex_store::{ops, Store};
//!
//! let store = Store::seeded();
//! let products = ops::product::list_products(&store.catalog);
//! ops::cart::add_to_cart(&store.catalog, &store.cart, &products[0].id, None)?;
//! ```

use serde_json::json;

use crate::seed::seed_data;
use crate::state::{
    CartState, CatalogState, DeliveryState, OrdersState, SessionState, StoreConfig,
};

/// The shared application store.
///
/// Operations take the individual state containers they need; the facade
/// exists so callers hold one handle and so tests can build a full store in
/// one line.
#[derive(Debug)]
pub struct Store {
    pub catalog: CatalogState,
    pub delivery: DeliveryState,
    pub orders: OrdersState,
    pub cart: CartState,
    pub session: SessionState,
    pub config: StoreConfig,
}

impl Store {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Store::with_config(StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Store {
            catalog: CatalogState::new(),
            delivery: DeliveryState::new(),
            orders: OrdersState::new(),
            cart: CartState::new(),
            session: SessionState::new(),
            config,
        }
    }

    /// Creates a store populated with the mock fixtures.
    pub fn seeded() -> Self {
        let data = seed_data();
        Store {
            catalog: CatalogState::from_products(data.products),
            delivery: DeliveryState::from_staff(data.staff),
            orders: OrdersState::from_orders(data.orders),
            cart: CartState::new(),
            session: SessionState::new(),
            config: StoreConfig::from_env(),
        }
    }

    /// Serializes the entire store state to JSON.
    ///
    /// The frontend hydrates from this on load; it is also handy for
    /// debugging a running store.
    pub fn snapshot(&self) -> serde_json::Value {
        json!({
            "products": self.catalog.with_products(|p| p.clone()),
            "deliveryStaff": self.delivery.with_staff(|s| s.clone()),
            "orders": self.orders.with_orders(|o| o.clone()),
            "cart": self.cart.with_cart(|c| c.clone()),
            "user": self.session.user(),
            "config": self.config.clone(),
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
