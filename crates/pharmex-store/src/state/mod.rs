//! # State Module
//!
//! Shared state containers for the store.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct containing everything, each concern gets its
//! own container. Operations declare exactly which states they touch, and
//! independent states don't block each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       State Architecture                            │
//! │                                                                     │
//! │  ┌─────────────┐ ┌──────────────┐ ┌─────────────┐                   │
//! │  │CatalogState │ │DeliveryState │ │ OrdersState │                   │
//! │  │             │ │              │ │             │                   │
//! │  │ Arc<Mutex<  │ │ Arc<Mutex<   │ │ Arc<Mutex<  │                   │
//! │  │  Vec<       │ │  Vec<        │ │  Vec<       │                   │
//! │  │  Product>>> │ │  Staff>>>    │ │  Order>>>   │                   │
//! │  └─────────────┘ └──────────────┘ └─────────────┘                   │
//! │                                                                     │
//! │  ┌─────────────┐ ┌──────────────┐ ┌─────────────┐                   │
//! │  │  CartState  │ │ SessionState │ │ StoreConfig │                   │
//! │  │             │ │              │ │             │                   │
//! │  │ Arc<Mutex<  │ │ Arc<Mutex<   │ │ read-only   │                   │
//! │  │  Cart>>     │ │  Option<     │ │ after init  │                   │
//! │  │             │ │  User>>>     │ │             │                   │
//! │  └─────────────┘ └──────────────┘ └─────────────┘                   │
//! │                                                                     │
//! │  THREAD SAFETY: every mutation is one uninterrupted update under    │
//! │  the owning container's Mutex.                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod delivery;
mod orders;
mod session;

pub use cart::{Cart, CartItem, CartState, CartTotals};
pub use catalog::CatalogState;
pub use config::StoreConfig;
pub use delivery::DeliveryState;
pub use orders::OrdersState;
pub use session::SessionState;
