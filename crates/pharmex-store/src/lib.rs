//! # pharmex-store: In-Memory Shared Store
//!
//! The shared store behind every Pharmex view: customers browse and order,
//! admins manage inventory and assign deliveries, delivery staff advance
//! order status. All of it is in-process state seeded with mock data; there
//! is no persistence, no network, and no real authentication.
//!
//! ## Module Organization
//! ```text
//! pharmex_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── Store facade (new / seeded / snapshot)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Product catalog
//! │   ├── delivery.rs ◄─── Delivery-staff roster
//! │   ├── orders.rs   ◄─── Orders collection
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── session.rs  ◄─── Current user
//! │   └── config.rs   ◄─── Configuration state
//! ├── ops/
//! │   ├── mod.rs      ◄─── Operation exports
//! │   ├── product.rs  ◄─── Catalog queries, admin CRUD
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── order.rs    ◄─── Checkout, assignment, status machine
//! │   ├── delivery.rs ◄─── Roster reads
//! │   └── session.rs  ◄─── Login stub / role gate
//! ├── seed.rs         ◄─── Mock fixtures
//! └── error.rs        ◄─── Store error type
//! ```
//!
//! ## Concurrency Model
//! Single-threaded, synchronous, event-driven: every operation is one
//! uninterrupted state rewrite under the owning container's Mutex, triggered
//! by a user action. No suspension points, no background tasks, no rollback.

pub mod error;
pub mod ops;
pub mod seed;
pub mod state;
pub mod store;

pub use error::{ErrorCode, StoreError, StoreResult};
pub use state::{Cart, CartItem, CartState, CartTotals, CatalogState, DeliveryState, OrdersState, SessionState, StoreConfig};
pub use store::Store;
