//! # Cart State
//!
//! Manages the current shopping cart state.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                            │
//! │                                                                     │
//! │  Frontend Action          Store Operation         Cart Change       │
//! │  ───────────────          ───────────────         ───────────       │
//! │                                                                     │
//! │  Click "Add to Cart" ───► add_to_cart() ────────► merge or push     │
//! │                                                                     │
//! │  Change Quantity ───────► update_cart_item() ───► qty = n (0: drop) │
//! │                                                                     │
//! │  Click Remove ──────────► remove_from_cart() ───► items.retain(..)  │
//! │                                                                     │
//! │  Place Order ───────────► place_order() ────────► items.clear()     │
//! │                                                                     │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmex_core::{CoreError, Money, Product, MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference to the product (for catalog lookup)
/// - name/price/image are frozen copies of product data at time of adding,
///   so the cart displays consistent data even if the product is edited
///   after being added.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (UUID)
    pub product_id: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    /// Image URL at time of adding (frozen)
    pub image_url: String,

    /// Quantity in cart
    pub quantity: i64,

    /// When this item was added to cart
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a product and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the product price changes in
    /// the catalog, this cart line retains the original price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            image_url: product.image_url.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Line total as Money.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again
///   increases quantity instead of appending a second line)
/// - Quantity is > 0 on every line (updating to 0 or below removes the line)
/// - Maximum distinct lines: [`MAX_CART_ITEMS`]
/// - Maximum quantity per line: [`MAX_ITEM_QUANTITY`]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: increases quantity
    /// - If product not in cart: appends a new line with frozen price
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CoreError> {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Updates the quantity of a line in the cart.
    ///
    /// ## Behavior
    /// - Quantity 0 or below: removes the line entirely
    /// - Product not in cart: returns error
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), CoreError> {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            Ok(())
        } else {
            Err(CoreError::NotInCart {
                product_id: product_id.to_string(),
            })
        }
    }

    /// Removes a line from the cart by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), CoreError> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::NotInCart {
                product_id: product_id.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the cart total: sum of price × quantity across all lines.
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Cart total as Money (two-decimal display via `Display`).
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total_cents(),
        }
    }
}

/// Shared cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>`:
/// - `Arc`: shared ownership between the store facade and callers
/// - `Mutex`: one mutation at a time; every cart "transaction" is a single
///   uninterrupted update under the lock
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: "test".to_string(),
            category: "Test".to_string(),
            price_cents,
            stock: 100,
            image_url: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 899); // $8.99

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_cents(), 1798); // $17.98
    }

    #[test]
    fn test_cart_add_same_product_merges() {
        let mut cart = Cart::new();
        let product = test_product("1", 899);

        cart.add_item(&product, 1).unwrap();
        cart.add_item(&product, 1).unwrap();

        // One line with quantity 2, not two lines
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_cart_update_to_zero_removes_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 899);

        cart.add_item(&product, 3).unwrap();
        cart.update_quantity("1", 0).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_update_unknown_product_errors() {
        let mut cart = Cart::new();
        let err = cart.update_quantity("missing", 2).unwrap_err();
        assert!(matches!(err, CoreError::NotInCart { .. }));
    }

    #[test]
    fn test_cart_total_is_sum_of_lines() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 899), 2).unwrap(); // 17.98
        cart.add_item(&test_product("2", 999), 1).unwrap(); // 9.99

        assert_eq!(cart.total_cents(), 2797);
        assert_eq!(format!("{}", cart.total()), "$27.97");
    }

    #[test]
    fn test_cart_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 899);
        cart.add_item(&product, 1).unwrap();

        product.price_cents = 1299;
        assert_eq!(cart.total_cents(), 899);
    }

    #[test]
    fn test_cart_quantity_cap() {
        let mut cart = Cart::new();
        let product = test_product("1", 899);
        let err = cart.add_item(&product, MAX_ITEM_QUANTITY + 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 899), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }
}
