//! # Store Operations Module
//!
//! Every mutation and query the view layer can perform against the store.
//!
//! ## Operation Organization
//! ```text
//! ops/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog queries, admin CRUD
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── order.rs    ◄─── Checkout, assignment, status machine, dashboards
//! ├── delivery.rs ◄─── Roster reads
//! └── session.rs  ◄─── Login stub / role gate
//! ```
//!
//! ## State Injection
//! Each operation declares exactly the state containers it touches:
//! ```text
//! // Only needs the cart
//! get_cart(cart: &CartState)
//!
//! // Needs catalog + cart (price snapshot at add time)
//! add_to_cart(catalog: &CatalogState, cart: &CartState, ...)
//!
//! // Needs orders + roster (counter mutation on assignment)
//! assign_order(orders: &OrdersState, delivery: &DeliveryState, ...)
//! ```
//!
//! Control flow is always: view → operation → in-memory rewrite under the
//! owning Mutex → re-render from the updated state.

pub mod cart;
pub mod delivery;
pub mod order;
pub mod product;
pub mod session;
