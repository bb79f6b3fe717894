//! # Cart Operations
//!
//! Store operations for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Lifecycle                                │
//! │                                                                     │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐    │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Placed  │    │
//! │  │  Cart    │     │          │     │  Dialog  │     │  Order   │    │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘    │
//! │                        │                 │                          │
//! │                   add_to_cart       place_order                     │
//! │                   update_cart_item  (order.rs)                      │
//! │                   remove_from_cart                                  │
//! │                        │                                            │
//! │                        ▼                                            │
//! │                   clear_cart ──────────────────────►                │
//! │                                                    (back to empty)  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::ops::product::get_product;
use crate::state::{Cart, CartItem, CartState, CartTotals, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents with calculated totals.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases on the existing line
/// - If product not in cart: added as a new line with frozen price
///
/// ## Arguments
/// * `product_id` - Product UUID to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
    quantity: Option<i64>,
) -> StoreResult<CartResponse> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart");

    let product = get_product(catalog, product_id)?;

    let response = cart.with_cart_mut(|c| {
        c.add_item(&product, quantity)?;
        Ok::<CartResponse, pharmex_core::CoreError>(CartResponse::from(&*c))
    })?;

    info!(product = %product.name, quantity = %quantity, "Added to cart");
    Ok(response)
}

/// Updates the quantity of a line in the cart.
///
/// ## Behavior
/// - Quantity 0 or below: removes the line entirely
/// - Product not in cart: returns error
pub fn update_cart_item(
    cart: &CartState,
    product_id: &str,
    quantity: i64,
) -> StoreResult<CartResponse> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item");

    let response = cart.with_cart_mut(|c| {
        c.update_quantity(product_id, quantity)?;
        Ok::<CartResponse, pharmex_core::CoreError>(CartResponse::from(&*c))
    })?;

    Ok(response)
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> StoreResult<CartResponse> {
    debug!(product_id = %product_id, "remove_from_cart");

    let response = cart.with_cart_mut(|c| {
        c.remove_item(product_id)?;
        Ok::<CartResponse, pharmex_core::CoreError>(CartResponse::from(&*c))
    })?;

    info!(product_id = %product_id, "Item removed from cart");
    Ok(response)
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User empties the cart manually
/// - After an order is placed (`place_order` calls this internally)
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
