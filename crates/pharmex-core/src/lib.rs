//! # pharmex-core: Pure Business Logic for Pharmex
//!
//! This crate is the **heart** of Pharmex. It contains all business logic
//! as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Pharmex Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (browser views)                   │   │
//! │  │   Customer pages ──► Admin pages ──► Delivery pages         │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                pharmex-store (shared store)                 │   │
//! │  │   catalog, orders, delivery roster, cart, session           │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ pharmex-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐              │   │
//! │  │   │   types   │  │   money   │  │ validation │              │   │
//! │  │   │  Product  │  │   Money   │  │   rules    │              │   │
//! │  │   │   Order   │  │           │  │   checks   │              │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘              │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, DeliveryStaff, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use pharmex_core::money::Money;
//! use pharmex_core::types::OrderStatus;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(899); // $8.99
//! assert_eq!(format!("{}", price), "$8.99");
//!
//! // Order status transitions are encoded in the type
//! assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Assigned));
//! assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pharmex_core::Money` instead of
// `use pharmex_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum active (assigned or in-transit) orders per delivery staff member.
///
/// Staff at this count are excluded from the assignable list; assignment
/// itself does not re-check the cap.
pub const MAX_ACTIVE_DELIVERIES: i64 = 3;

/// Maximum quantity of a single product in the cart.
///
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum number of distinct lines in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Stock level at or below which a product counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 50;
