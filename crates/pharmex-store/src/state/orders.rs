//! # Orders State
//!
//! Holds every order ever placed. Orders are appended on checkout and
//! mutated in place by assignment and status advancement; they are never
//! deleted.

use std::sync::{Arc, Mutex};

use pharmex_core::Order;

/// Shared orders collection.
#[derive(Debug)]
pub struct OrdersState {
    orders: Arc<Mutex<Vec<Order>>>,
}

impl OrdersState {
    /// Creates an empty orders collection.
    pub fn new() -> Self {
        OrdersState {
            orders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a collection pre-populated with the given orders.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        OrdersState {
            orders: Arc::new(Mutex::new(orders)),
        }
    }

    /// Executes a function with read access to the orders.
    pub fn with_orders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Order>) -> R,
    {
        let orders = self.orders.lock().expect("Orders mutex poisoned");
        f(&orders)
    }

    /// Executes a function with write access to the orders.
    pub fn with_orders_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Order>) -> R,
    {
        let mut orders = self.orders.lock().expect("Orders mutex poisoned");
        f(&mut orders)
    }
}

impl Default for OrdersState {
    fn default() -> Self {
        Self::new()
    }
}
