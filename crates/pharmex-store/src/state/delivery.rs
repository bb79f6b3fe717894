//! # Delivery Roster State
//!
//! Holds the delivery-staff roster. Assignment and delivery completion
//! mutate the per-staff counters here; the roster itself is fixed mock data.
//!
//! ## Counter Drift
//! `assigned_orders` is mutated independently of the orders collection (on
//! assign and on delivery completion). The seed fixtures keep the two in
//! agreement; nothing re-derives the counter from the orders afterwards.

use std::sync::{Arc, Mutex};

use pharmex_core::DeliveryStaff;

/// Shared delivery-staff roster.
#[derive(Debug)]
pub struct DeliveryState {
    staff: Arc<Mutex<Vec<DeliveryStaff>>>,
}

impl DeliveryState {
    /// Creates an empty roster.
    pub fn new() -> Self {
        DeliveryState {
            staff: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a roster pre-populated with the given staff.
    pub fn from_staff(staff: Vec<DeliveryStaff>) -> Self {
        DeliveryState {
            staff: Arc::new(Mutex::new(staff)),
        }
    }

    /// Executes a function with read access to the roster.
    pub fn with_staff<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<DeliveryStaff>) -> R,
    {
        let staff = self.staff.lock().expect("Delivery mutex poisoned");
        f(&staff)
    }

    /// Executes a function with write access to the roster.
    pub fn with_staff_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<DeliveryStaff>) -> R,
    {
        let mut staff = self.staff.lock().expect("Delivery mutex poisoned");
        f(&mut staff)
    }
}

impl Default for DeliveryState {
    fn default() -> Self {
        Self::new()
    }
}
