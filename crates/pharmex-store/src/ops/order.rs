//! # Order Operations
//!
//! Checkout, the status/assignment state machine, and the order queries
//! behind the admin and delivery dashboards.
//!
//! ## Order State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                  │
//! │                                                                     │
//! │  place_order        assign_order         update_order_status        │
//! │      │                   │                    │          │          │
//! │      ▼                   ▼                    ▼          ▼          │
//! │  ┌─────────┐      ┌──────────┐       ┌────────────┐  ┌───────────┐  │
//! │  │ pending │─────►│ assigned │──────►│ in-transit │─►│ delivered │  │
//! │  └─────────┘      └──────────┘       └────────────┘  └───────────┘  │
//! │                        │                                  │         │
//! │                 staff.assigned += 1            staff.assigned -= 1  │
//! │                                                staff.completed += 1 │
//! │                                                                     │
//! │  Capacity: staff with assigned_orders >= 3 are excluded from the    │
//! │  assignable list (available_delivery_staff); assign_order itself    │
//! │  performs no capacity check.                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ErrorCode, StoreError, StoreResult};
use crate::state::{CartState, CatalogState, DeliveryState, OrdersState};
use pharmex_core::validation::validate_customer;
use pharmex_core::{
    CoreError, CustomerInfo, DeliveryStaff, Order, OrderItem, OrderStatus, StaffRef,
};

// =============================================================================
// DTOs
// =============================================================================

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_products: usize,
    pub total_orders: usize,
    pub total_staff: usize,
    pub pending_orders: usize,
    pub in_transit_orders: usize,
}

/// Workload summary for one delivery staff member's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDashboard {
    /// Orders assigned to this staff member that are not yet delivered.
    pub active_orders: usize,
    /// Assigned, awaiting pickup.
    pub pending_pickup: usize,
    /// Currently on the road.
    pub in_transit: usize,
    /// Delivered with today's date.
    pub delivered_today: usize,
    /// Lifetime delivered count (from the orders collection).
    pub completed_total: usize,
    /// Active load as a percentage of the cap.
    pub workload_percentage: f64,
}

// =============================================================================
// Checkout
// =============================================================================

/// Places an order from the current cart.
///
/// ## Behavior
/// - Snapshots every cart line (name and price at order time) into the order
/// - Total is the cart total; stock is NOT decremented
/// - Order starts `pending` with no delivery staff
/// - Clears the cart on success
///
/// ## Errors
/// - Empty cart
/// - Missing customer name/address/contact
pub fn place_order(
    cart: &CartState,
    orders: &OrdersState,
    customer: CustomerInfo,
) -> StoreResult<Order> {
    debug!(customer = %customer.name, "place_order");

    validate_customer(&customer)?;

    let (items, total_cents) = cart.with_cart(|c| {
        let items: Vec<OrderItem> = c
            .items
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
            })
            .collect();
        (items, c.total_cents())
    });

    if items.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    let now = Utc::now();
    let order = Order {
        id: Uuid::new_v4().to_string(),
        order_number: generate_order_number(now),
        customer,
        items,
        total_cents,
        status: OrderStatus::Pending,
        delivery_staff: None,
        created_at: now,
        updated_at: now,
    };

    orders.with_orders_mut(|all| all.push(order.clone()));
    cart.with_cart_mut(|c| c.clear());

    info!(
        order_number = %order.order_number,
        total = %order.total(),
        items = order.items.len(),
        "Order placed"
    );
    Ok(order)
}

/// Generates a human-readable order number from the order timestamp.
pub(crate) fn generate_order_number(at: DateTime<Utc>) -> String {
    let suffix = (at.timestamp_subsec_nanos() % 10000) as u16;
    format!("ORD-{}-{:04}", at.format("%y%m%d-%H%M%S"), suffix)
}

// =============================================================================
// Assignment and Status Advancement
// =============================================================================

/// Assigns a pending order to a delivery staff member.
///
/// ## Behavior
/// - Valid only from `pending`
/// - Attaches the staff id+name to the order and sets status `assigned`
/// - Increments the staff member's `assigned_orders` counter
///
/// Capacity is not checked here: callers offer only staff from
/// [`available_delivery_staff`].
pub fn assign_order(
    orders: &OrdersState,
    delivery: &DeliveryState,
    order_id: &str,
    staff_id: &str,
) -> StoreResult<Order> {
    debug!(order_id = %order_id, staff_id = %staff_id, "assign_order");

    let staff_ref = delivery
        .with_staff(|staff| {
            staff.iter().find(|s| s.id == staff_id).map(|s| StaffRef {
                id: s.id.clone(),
                name: s.name.clone(),
            })
        })
        .ok_or_else(|| StoreError::not_found("Delivery staff", staff_id))?;

    let updated = orders.with_orders_mut(|all| {
        let order = all
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| StoreError::not_found("Order", order_id))?;

        if order.status != OrderStatus::Pending {
            return Err(CoreError::InvalidStatusTransition {
                order_id: order_id.to_string(),
                from: order.status,
                to: OrderStatus::Assigned,
            }
            .into());
        }

        order.status = OrderStatus::Assigned;
        order.delivery_staff = Some(staff_ref.clone());
        order.updated_at = Utc::now();
        Ok::<Order, StoreError>(order.clone())
    })?;

    delivery.with_staff_mut(|staff| {
        if let Some(s) = staff.iter_mut().find(|s| s.id == staff_id) {
            s.assigned_orders += 1;
        }
    });

    info!(
        order_number = %updated.order_number,
        staff = %staff_ref.name,
        "Order assigned"
    );
    Ok(updated)
}

/// Advances an order's status.
///
/// ## Behavior
/// - `assigned` → `in-transit`: changes only the status
/// - `in-transit` → `delivered`: also decrements the assigned staff member's
///   `assigned_orders` and increments their `completed_orders`
/// - Every other target is rejected, including `assigned` (use
///   [`assign_order`]) and `cancelled`, which no transition produces
pub fn update_order_status(
    orders: &OrdersState,
    delivery: &DeliveryState,
    order_id: &str,
    new_status: OrderStatus,
) -> StoreResult<Order> {
    debug!(order_id = %order_id, new_status = %new_status, "update_order_status");

    if new_status == OrderStatus::Assigned {
        return Err(StoreError::new(
            ErrorCode::BusinessLogic,
            "Assignment requires a delivery staff id; use assign_order",
        ));
    }

    let updated = orders.with_orders_mut(|all| {
        let order = all
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| StoreError::not_found("Order", order_id))?;

        if !order.status.can_transition_to(new_status) {
            return Err(CoreError::InvalidStatusTransition {
                order_id: order_id.to_string(),
                from: order.status,
                to: new_status,
            }
            .into());
        }

        order.status = new_status;
        order.updated_at = Utc::now();
        Ok::<Order, StoreError>(order.clone())
    })?;

    // Delivery completion updates the staff counters.
    if new_status == OrderStatus::Delivered {
        if let Some(staff_ref) = &updated.delivery_staff {
            delivery.with_staff_mut(|staff| {
                if let Some(s) = staff.iter_mut().find(|s| s.id == staff_ref.id) {
                    s.assigned_orders -= 1;
                    s.completed_orders += 1;
                }
            });
        }
    }

    info!(
        order_number = %updated.order_number,
        status = %new_status,
        "Order status updated"
    );
    Ok(updated)
}

/// Lists the staff members with spare capacity for a new assignment.
///
/// This is the entire capacity policy: staff at the cap simply do not appear
/// in the assignable list.
pub fn available_delivery_staff(delivery: &DeliveryState) -> Vec<DeliveryStaff> {
    delivery.with_staff(|staff| {
        staff.iter().filter(|s| s.is_available()).cloned().collect()
    })
}

// =============================================================================
// Queries
// =============================================================================

/// Gets a single order by its UUID.
pub fn get_order(orders: &OrdersState, order_id: &str) -> StoreResult<Order> {
    orders
        .with_orders(|all| all.iter().find(|o| o.id == order_id).cloned())
        .ok_or_else(|| StoreError::not_found("Order", order_id))
}

/// Lists all orders, newest first.
pub fn list_orders(orders: &OrdersState) -> Vec<Order> {
    let mut all = orders.with_orders(|all| all.clone());
    all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    all
}

/// Searches orders by customer name, address, or order number, with an
/// optional status filter. Results are newest first.
pub fn search_orders(
    orders: &OrdersState,
    query: &str,
    status: Option<OrderStatus>,
) -> Vec<Order> {
    let query = query.trim().to_lowercase();

    let mut matches: Vec<Order> = orders.with_orders(|all| {
        all.iter()
            .filter(|o| {
                let matches_query = query.is_empty()
                    || o.customer.name.to_lowercase().contains(&query)
                    || o.customer.address.to_lowercase().contains(&query)
                    || o.order_number.to_lowercase().contains(&query);

                let matches_status = status.map_or(true, |s| o.status == s);

                matches_query && matches_status
            })
            .cloned()
            .collect()
    });
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matches
}

/// Lists all orders assigned to the given staff member, newest first.
pub fn orders_for_staff(orders: &OrdersState, staff_id: &str) -> Vec<Order> {
    let mut mine: Vec<Order> = orders.with_orders(|all| {
        all.iter()
            .filter(|o| o.is_assigned_to(staff_id))
            .cloned()
            .collect()
    });
    mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    mine
}

/// Computes the headline counts for the admin dashboard.
pub fn admin_dashboard(
    catalog: &CatalogState,
    delivery: &DeliveryState,
    orders: &OrdersState,
) -> AdminDashboard {
    let (total_orders, pending_orders, in_transit_orders) = orders.with_orders(|all| {
        (
            all.len(),
            all.iter().filter(|o| o.status == OrderStatus::Pending).count(),
            all.iter()
                .filter(|o| o.status == OrderStatus::InTransit)
                .count(),
        )
    });

    AdminDashboard {
        total_products: catalog.with_products(|p| p.len()),
        total_orders,
        total_staff: delivery.with_staff(|s| s.len()),
        pending_orders,
        in_transit_orders,
    }
}

/// Computes the workload summary for one delivery staff member.
pub fn delivery_dashboard(orders: &OrdersState, staff_id: &str) -> DeliveryDashboard {
    let mine = orders_for_staff(orders, staff_id);
    let today = Utc::now().date_naive();

    let active: Vec<&Order> = mine
        .iter()
        .filter(|o| o.status != OrderStatus::Delivered)
        .collect();
    let delivered: Vec<&Order> = mine
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .collect();

    DeliveryDashboard {
        active_orders: active.len(),
        pending_pickup: mine
            .iter()
            .filter(|o| o.status == OrderStatus::Assigned)
            .count(),
        in_transit: mine
            .iter()
            .filter(|o| o.status == OrderStatus::InTransit)
            .count(),
        delivered_today: delivered
            .iter()
            .filter(|o| o.updated_at.date_naive() == today)
            .count(),
        completed_total: delivered.len(),
        workload_percentage: (active.len() as f64
            / pharmex_core::MAX_ACTIVE_DELIVERIES as f64)
            * 100.0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn staff(id: &str, name: &str, assigned: i64, completed: i64) -> DeliveryStaff {
        DeliveryStaff {
            id: id.to_string(),
            name: name.to_string(),
            contact: "555-123-4567".to_string(),
            assigned_orders: assigned,
            completed_orders: completed,
            image_url: String::new(),
        }
    }

    fn order(id: &str, status: OrderStatus, staff_ref: Option<StaffRef>) -> Order {
        let now = Utc::now();
        Order {
            id: id.to_string(),
            order_number: generate_order_number(now),
            customer: CustomerInfo {
                name: "Emma Thompson".to_string(),
                address: "123 Maple St".to_string(),
                contact: "555-111-2222".to_string(),
            },
            items: vec![OrderItem {
                product_id: "p1".to_string(),
                name: "Ibuprofen".to_string(),
                quantity: 2,
                unit_price_cents: 899,
            }],
            total_cents: 1798,
            status,
            delivery_staff: staff_ref,
            created_at: now,
            updated_at: now,
        }
    }

    fn staff_ref(id: &str, name: &str) -> StaffRef {
        StaffRef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn assigned_count(delivery: &DeliveryState, id: &str) -> i64 {
        delivery.with_staff(|s| s.iter().find(|x| x.id == id).unwrap().assigned_orders)
    }

    fn completed_count(delivery: &DeliveryState, id: &str) -> i64 {
        delivery.with_staff(|s| s.iter().find(|x| x.id == id).unwrap().completed_orders)
    }

    #[test]
    fn test_assign_pending_order() {
        let orders = OrdersState::from_orders(vec![order("o1", OrderStatus::Pending, None)]);
        let delivery = DeliveryState::from_staff(vec![staff("s1", "John Smith", 0, 15)]);

        let updated = assign_order(&orders, &delivery, "o1", "s1").unwrap();

        assert_eq!(updated.status, OrderStatus::Assigned);
        assert_eq!(
            updated.delivery_staff,
            Some(staff_ref("s1", "John Smith"))
        );
        assert_eq!(assigned_count(&delivery, "s1"), 1);
    }

    #[test]
    fn test_assign_non_pending_order_rejected_without_side_effects() {
        let orders = OrdersState::from_orders(vec![order(
            "o1",
            OrderStatus::Assigned,
            Some(staff_ref("s1", "John Smith")),
        )]);
        let delivery = DeliveryState::from_staff(vec![
            staff("s1", "John Smith", 1, 15),
            staff("s2", "Michael Johnson", 0, 23),
        ]);

        let err = assign_order(&orders, &delivery, "o1", "s2").unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidTransition);
        // Neither the order nor any counter changed.
        let unchanged = get_order(&orders, "o1").unwrap();
        assert_eq!(unchanged.delivery_staff, Some(staff_ref("s1", "John Smith")));
        assert_eq!(assigned_count(&delivery, "s1"), 1);
        assert_eq!(assigned_count(&delivery, "s2"), 0);
    }

    #[test]
    fn test_assign_unknown_staff_rejected() {
        let orders = OrdersState::from_orders(vec![order("o1", OrderStatus::Pending, None)]);
        let delivery = DeliveryState::from_staff(vec![]);

        let err = assign_order(&orders, &delivery, "o1", "ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_order(&orders, "o1").unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn test_advance_assigned_to_in_transit_changes_only_status() {
        let orders = OrdersState::from_orders(vec![order(
            "o1",
            OrderStatus::Assigned,
            Some(staff_ref("s1", "John Smith")),
        )]);
        let delivery = DeliveryState::from_staff(vec![staff("s1", "John Smith", 1, 15)]);

        let updated =
            update_order_status(&orders, &delivery, "o1", OrderStatus::InTransit).unwrap();

        assert_eq!(updated.status, OrderStatus::InTransit);
        assert_eq!(updated.delivery_staff, Some(staff_ref("s1", "John Smith")));
        assert_eq!(assigned_count(&delivery, "s1"), 1);
        assert_eq!(completed_count(&delivery, "s1"), 15);
    }

    #[test]
    fn test_advance_in_transit_to_delivered_updates_counters() {
        let orders = OrdersState::from_orders(vec![order(
            "o1",
            OrderStatus::InTransit,
            Some(staff_ref("s1", "John Smith")),
        )]);
        let delivery = DeliveryState::from_staff(vec![staff("s1", "John Smith", 1, 15)]);

        let updated =
            update_order_status(&orders, &delivery, "o1", OrderStatus::Delivered).unwrap();

        assert_eq!(updated.status, OrderStatus::Delivered);
        assert_eq!(assigned_count(&delivery, "s1"), 0);
        assert_eq!(completed_count(&delivery, "s1"), 16);
    }

    #[test]
    fn test_pending_cannot_skip_states() {
        let orders = OrdersState::from_orders(vec![order("o1", OrderStatus::Pending, None)]);
        let delivery = DeliveryState::new();

        for target in [OrderStatus::InTransit, OrderStatus::Delivered] {
            let err = update_order_status(&orders, &delivery, "o1", target).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidTransition);
        }
        assert_eq!(get_order(&orders, "o1").unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn test_delivered_is_terminal() {
        let orders = OrdersState::from_orders(vec![order(
            "o1",
            OrderStatus::Delivered,
            Some(staff_ref("s1", "John Smith")),
        )]);
        let delivery = DeliveryState::from_staff(vec![staff("s1", "John Smith", 0, 16)]);

        for target in [OrderStatus::InTransit, OrderStatus::Delivered] {
            let err = update_order_status(&orders, &delivery, "o1", target).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidTransition);
        }
    }

    #[test]
    fn test_no_path_to_cancelled() {
        for from in [
            OrderStatus::Pending,
            OrderStatus::Assigned,
            OrderStatus::InTransit,
        ] {
            let orders = OrdersState::from_orders(vec![order("o1", from, None)]);
            let delivery = DeliveryState::new();
            let err =
                update_order_status(&orders, &delivery, "o1", OrderStatus::Cancelled).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidTransition);
        }
    }

    #[test]
    fn test_assignment_target_rejected_by_status_update() {
        let orders = OrdersState::from_orders(vec![order("o1", OrderStatus::Pending, None)]);
        let delivery = DeliveryState::new();

        let err = update_order_status(&orders, &delivery, "o1", OrderStatus::Assigned).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_capacity_gate_excludes_loaded_staff() {
        let delivery = DeliveryState::from_staff(vec![
            staff("s1", "John Smith", 3, 15),
            staff("s2", "Michael Johnson", 2, 23),
        ]);

        let available = available_delivery_staff(&delivery);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "s2");
    }

    #[test]
    fn test_assignment_can_fill_last_capacity_slot() {
        let orders = OrdersState::from_orders(vec![order("o1", OrderStatus::Pending, None)]);
        let delivery = DeliveryState::from_staff(vec![staff("s1", "John Smith", 2, 15)]);

        assert_eq!(available_delivery_staff(&delivery).len(), 1);
        assign_order(&orders, &delivery, "o1", "s1").unwrap();

        // Counter reached the cap; the staff member leaves the assignable list.
        assert_eq!(assigned_count(&delivery, "s1"), 3);
        assert!(available_delivery_staff(&delivery).is_empty());
    }

    #[test]
    fn test_search_orders_by_customer_and_status() {
        let mut second = order("o2", OrderStatus::InTransit, Some(staff_ref("s1", "John Smith")));
        second.customer.name = "Robert Davis".to_string();
        second.customer.address = "456 Oak Ave".to_string();

        let orders =
            OrdersState::from_orders(vec![order("o1", OrderStatus::Pending, None), second]);

        let results = search_orders(&orders, "robert", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "o2");

        let results = search_orders(&orders, "", Some(OrderStatus::Pending));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "o1");

        // Address matches too
        let results = search_orders(&orders, "oak", None);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_dashboards() {
        let catalog = CatalogState::new();
        let delivery = DeliveryState::from_staff(vec![staff("s1", "John Smith", 1, 15)]);
        let orders = OrdersState::from_orders(vec![
            order("o1", OrderStatus::Pending, None),
            order("o2", OrderStatus::InTransit, Some(staff_ref("s1", "John Smith"))),
            order("o3", OrderStatus::Delivered, Some(staff_ref("s1", "John Smith"))),
        ]);

        let admin = admin_dashboard(&catalog, &delivery, &orders);
        assert_eq!(admin.total_orders, 3);
        assert_eq!(admin.pending_orders, 1);
        assert_eq!(admin.in_transit_orders, 1);
        assert_eq!(admin.total_staff, 1);

        let mine = delivery_dashboard(&orders, "s1");
        assert_eq!(mine.active_orders, 1);
        assert_eq!(mine.in_transit, 1);
        assert_eq!(mine.pending_pickup, 0);
        assert_eq!(mine.completed_total, 1);
        assert_eq!(mine.delivered_today, 1);
    }

    #[test]
    fn test_place_order_from_cart() {
        use crate::ops::cart::add_to_cart;
        use crate::ops::product::{create_product, get_product, NewProduct};

        let catalog = CatalogState::new();
        let product = create_product(
            &catalog,
            NewProduct {
                name: "Ibuprofen".to_string(),
                description: "Pain reliever, 200mg tablets".to_string(),
                category: "Pain Relief".to_string(),
                price_cents: 899,
                stock: 150,
                image_url: String::new(),
            },
        )
        .unwrap();

        let cart = CartState::new();
        let orders = OrdersState::new();
        add_to_cart(&catalog, &cart, &product.id, Some(2)).unwrap();

        let customer = CustomerInfo {
            name: "Emma Thompson".to_string(),
            address: "123 Maple St".to_string(),
            contact: "555-111-2222".to_string(),
        };
        let placed = place_order(&cart, &orders, customer).unwrap();

        assert_eq!(placed.status, OrderStatus::Pending);
        assert!(placed.delivery_staff.is_none());
        assert_eq!(placed.total_cents, 1798);
        assert_eq!(placed.items.len(), 1);
        assert!(placed.order_number.starts_with("ORD-"));

        // Cart cleared, order recorded, stock untouched.
        assert!(cart.with_cart(|c| c.is_empty()));
        assert_eq!(list_orders(&orders).len(), 1);
        assert_eq!(get_product(&catalog, &product.id).unwrap().stock, 150);
    }

    #[test]
    fn test_place_order_snapshots_survive_product_edits() {
        use crate::ops::cart::add_to_cart;
        use crate::ops::product::{create_product, update_product, NewProduct, ProductChanges};

        let catalog = CatalogState::new();
        let product = create_product(
            &catalog,
            NewProduct {
                name: "Ibuprofen".to_string(),
                description: "Pain reliever, 200mg tablets".to_string(),
                category: "Pain Relief".to_string(),
                price_cents: 899,
                stock: 150,
                image_url: String::new(),
            },
        )
        .unwrap();

        let cart = CartState::new();
        let orders = OrdersState::new();
        add_to_cart(&catalog, &cart, &product.id, None).unwrap();
        let customer = CustomerInfo {
            name: "Emma Thompson".to_string(),
            address: "123 Maple St".to_string(),
            contact: "555-111-2222".to_string(),
        };
        let placed = place_order(&cart, &orders, customer).unwrap();

        update_product(
            &catalog,
            &product.id,
            ProductChanges {
                name: Some("Ibuprofen Extra".to_string()),
                price_cents: Some(1299),
                ..ProductChanges::default()
            },
        )
        .unwrap();

        let stored = get_order(&orders, &placed.id).unwrap();
        assert_eq!(stored.items[0].name, "Ibuprofen");
        assert_eq!(stored.items[0].unit_price_cents, 899);
    }

    #[test]
    fn test_place_order_empty_cart_rejected() {
        let cart = CartState::new();
        let orders = OrdersState::new();
        let customer = CustomerInfo {
            name: "Emma Thompson".to_string(),
            address: "123 Maple St".to_string(),
            contact: "555-111-2222".to_string(),
        };

        let err = place_order(&cart, &orders, customer).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert!(list_orders(&orders).is_empty());
    }

    #[test]
    fn test_place_order_requires_customer_details() {
        use crate::ops::cart::add_to_cart;
        use crate::ops::product::{create_product, NewProduct};

        let catalog = CatalogState::new();
        let product = create_product(
            &catalog,
            NewProduct {
                name: "Aspirin".to_string(),
                description: "Blood thinner, 81mg tablets".to_string(),
                category: "Heart Health".to_string(),
                price_cents: 699,
                stock: 250,
                image_url: String::new(),
            },
        )
        .unwrap();

        let cart = CartState::new();
        let orders = OrdersState::new();
        add_to_cart(&catalog, &cart, &product.id, None).unwrap();

        let customer = CustomerInfo {
            name: "Emma Thompson".to_string(),
            address: String::new(),
            contact: "555-111-2222".to_string(),
        };
        let err = place_order(&cart, &orders, customer).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Cart untouched on failure.
        assert!(!cart.with_cart(|c| c.is_empty()));
    }
}
