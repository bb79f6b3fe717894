//! # Domain Types
//!
//! Core domain types used throughout Pharmex.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐       │
//! │  │    Product     │   │     Order      │   │ DeliveryStaff  │       │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │       │
//! │  │  id (UUID)     │   │  id (UUID)     │   │  id (UUID)     │       │
//! │  │  category      │   │  order_number  │   │  assigned      │       │
//! │  │  price_cents   │   │  status        │   │  completed     │       │
//! │  │  stock         │   │  total_cents   │   │  contact       │       │
//! │  └────────────────┘   └────────────────┘   └────────────────┘       │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐       │
//! │  │  OrderStatus   │   │   OrderItem    │   │   User/Role    │       │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │       │
//! │  │  Pending       │   │  snapshot of   │   │  Admin         │       │
//! │  │  Assigned      │   │  name + price  │   │  Delivery      │       │
//! │  │  InTransit     │   │  at order time │   │  Customer      │       │
//! │  │  Delivered     │   └────────────────┘   └────────────────┘       │
//! │  │  Cancelled     │                                                 │
//! │  └────────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Orders have:
//! - `id`: UUID v4 - immutable, used for references
//! - `order_number`: timestamp-derived, human-readable (shown to customers)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::MAX_ACTIVE_DELIVERIES;

// =============================================================================
// Product
// =============================================================================

/// A product available in the pharmacy catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to customers and on order lines.
    pub name: String,

    /// Short description (dosage form, strength).
    pub description: String,

    /// Catalog category (e.g. "Pain Relief", "Antibiotics").
    pub category: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Current stock level. Informational: checkout does not decrement it.
    pub stock: i64,

    /// Image URL for display.
    pub image_url: String,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the stock level is at or below the given threshold.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.stock <= threshold
    }
}

// =============================================================================
// Delivery Staff
// =============================================================================

/// A delivery staff member.
///
/// ## Counter Semantics
/// `assigned_orders` increments on assignment and decrements on delivery
/// completion (which also increments `completed_orders`). The counters are
/// mutated independently of the orders collection.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryStaff {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Full name.
    pub name: String,

    /// Contact phone number.
    pub contact: String,

    /// Count of currently active (assigned or in-transit) orders.
    pub assigned_orders: i64,

    /// Lifetime count of delivered orders.
    pub completed_orders: i64,

    /// Profile image URL for display.
    pub image_url: String,
}

impl DeliveryStaff {
    /// Checks whether this staff member can take another order.
    ///
    /// Staff at [`MAX_ACTIVE_DELIVERIES`] are excluded from the assignable
    /// list; assignment itself does not re-check the cap.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.assigned_orders < MAX_ACTIVE_DELIVERIES
    }

    /// Current workload as a percentage of the active-order cap.
    #[inline]
    pub fn workload_percentage(&self) -> f64 {
        (self.assigned_orders as f64 / MAX_ACTIVE_DELIVERIES as f64) * 100.0
    }
}

/// Lightweight reference to a delivery staff member attached to an order.
///
/// Orders carry id+name only, not the full record; the counters live on the
/// roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StaffRef {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// ## Transition Chain
/// ```text
/// pending ──► assigned ──► in-transit ──► delivered (terminal)
/// ```
/// `Cancelled` is a display status: no transition produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Placed by the customer, awaiting assignment.
    Pending,
    /// Assigned to a delivery staff member, awaiting pickup.
    Assigned,
    /// Picked up and on its way.
    InTransit,
    /// Handed to the customer (terminal).
    Delivered,
    /// Display-only status; unused by any transition.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order (for filter dropdowns).
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Assigned,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Checks whether the status may advance to `next`.
    ///
    /// Each transition is valid only from its immediate predecessor:
    /// assignment from `Pending`, in-transit from `Assigned`, delivered from
    /// `InTransit`. Everything else (including anything into `Cancelled`)
    /// is rejected.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Assigned)
                | (OrderStatus::Assigned, OrderStatus::InTransit)
                | (OrderStatus::InTransit, OrderStatus::Delivered)
        )
    }

    /// Checks whether the order has reached a final state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Checks whether the order counts against a staff member's active load.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, OrderStatus::Assigned | OrderStatus::InTransit)
    }

    /// Wire name, matching the serialized form (e.g. `"in-transit"`).
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Assigned => "assigned",
            OrderStatus::InTransit => "in-transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order
// =============================================================================

/// Customer details captured at checkout.
///
/// A snapshot, not a reference: orders keep the address they were placed
/// with even if the customer later changes it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerInfo {
    pub name: String,
    pub address: String,
    pub contact: String,
}

/// A line item in an order.
/// Uses the snapshot pattern to freeze product data at order time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    /// Product reference (for catalog lookup).
    pub product_id: String,
    /// Product name at order time (frozen).
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price in cents at order time (frozen).
    pub unit_price_cents: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// A customer order.
///
/// Created on checkout with status `Pending` and no staff; assignment and
/// status advancement mutate it in place. Orders are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable business identifier (timestamp-derived).
    pub order_number: String,

    /// Customer snapshot captured at checkout.
    pub customer: CustomerInfo,

    /// Line items with prices frozen at order time.
    pub items: Vec<OrderItem>,

    /// Order total in cents.
    pub total_cents: i64,

    /// Current lifecycle status.
    pub status: OrderStatus,

    /// Assigned delivery staff (id+name only), set on assignment.
    pub delivery_staff: Option<StaffRef>,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the order was last mutated (assignment or status change).
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks whether the order is assigned to the given staff member.
    pub fn is_assigned_to(&self, staff_id: &str) -> bool {
        self.delivery_staff
            .as_ref()
            .is_some_and(|s| s.id == staff_id)
    }
}

// =============================================================================
// Session User
// =============================================================================

/// The role a session user acts under. Gates which views render; the store
/// itself performs no permission checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Delivery,
    Customer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Delivery => f.write_str("delivery"),
            Role::Customer => f.write_str("customer"),
        }
    }
}

/// The current session user: a role tag plus minimal profile.
///
/// Set by the login stub, cleared on logout. For delivery users, `id` is the
/// roster id of the matching [`DeliveryStaff`] record so delivery views can
/// filter orders by staff.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: Option<String>,
    pub role: Role,
}

// =============================================================================
// Unit Tests
// =============================================================================
