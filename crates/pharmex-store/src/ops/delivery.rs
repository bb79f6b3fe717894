//! # Delivery Roster Operations
//!
//! Reads over the delivery-staff roster for the admin staff page. The
//! counters on each entry are mutated by the order operations
//! (`assign_order`, `update_order_status`), not here.

use crate::error::{StoreError, StoreResult};
use crate::state::DeliveryState;
use pharmex_core::DeliveryStaff;

/// Lists the full roster.
pub fn list_staff(delivery: &DeliveryState) -> Vec<DeliveryStaff> {
    delivery.with_staff(|staff| staff.clone())
}

/// Gets a single roster entry by id.
pub fn get_staff(delivery: &DeliveryState, id: &str) -> StoreResult<DeliveryStaff> {
    delivery
        .with_staff(|staff| staff.iter().find(|s| s.id == id).cloned())
        .ok_or_else(|| StoreError::not_found("Delivery staff", id))
}
