//! # Catalog State
//!
//! Holds the product catalog: the collection customers browse and admins
//! manage through create/update/delete.
//!
//! ## Thread Safety
//! The catalog is wrapped in `Arc<Mutex<Vec<Product>>>`. Every mutation is a
//! single uninterrupted rewrite under the lock, matching the one-action
//! one-mutation model of the store.

use std::sync::{Arc, Mutex};

use pharmex_core::Product;

/// Shared product catalog.
#[derive(Debug)]
pub struct CatalogState {
    products: Arc<Mutex<Vec<Product>>>,
}

impl CatalogState {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        CatalogState {
            products: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a catalog pre-populated with the given products.
    pub fn from_products(products: Vec<Product>) -> Self {
        CatalogState {
            products: Arc::new(Mutex::new(products)),
        }
    }

    /// Executes a function with read access to the products.
    pub fn with_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Product>) -> R,
    {
        let products = self.products.lock().expect("Catalog mutex poisoned");
        f(&products)
    }

    /// Executes a function with write access to the products.
    pub fn with_products_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Product>) -> R,
    {
        let mut products = self.products.lock().expect("Catalog mutex poisoned");
        f(&mut products)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
