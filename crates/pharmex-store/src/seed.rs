//! # Seed Data
//!
//! Mock fixtures the store starts from: a small pharmacy catalog, three
//! delivery staff, and five orders spanning every reachable status.
//!
//! ## Fixture Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  8 products   Ibuprofen, Amoxicillin, Loratadine, Omeprazole,       │
//! │               Acetaminophen, Salbutamol Inhaler, Aspirin, Metformin │
//! │                                                                     │
//! │  3 staff      John Smith (2 active / 15 done)                       │
//! │               Michael Johnson (1 active / 23 done)                  │
//! │               David Wilson (0 active / 18 done)                     │
//! │                                                                     │
//! │  5 orders     pending, assigned, 2× in-transit, delivered           │
//! │                                                                     │
//! │  INVARIANT: each staff member's assigned_orders equals the count    │
//! │  of their seeded orders with status assigned or in-transit.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::ops::order::generate_order_number;
use pharmex_core::{
    CustomerInfo, DeliveryStaff, Order, OrderItem, OrderStatus, Product, StaffRef,
};

/// Everything `Store::seeded()` starts from.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub staff: Vec<DeliveryStaff>,
    pub orders: Vec<Order>,
}

fn product(
    name: &str,
    description: &str,
    category: &str,
    price_cents: i64,
    stock: i64,
    image_url: &str,
    created_at: DateTime<Utc>,
) -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price_cents,
        stock,
        image_url: image_url.to_string(),
        created_at,
        updated_at: created_at,
    }
}

fn staff(
    name: &str,
    contact: &str,
    assigned_orders: i64,
    completed_orders: i64,
    image_url: &str,
) -> DeliveryStaff {
    DeliveryStaff {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        contact: contact.to_string(),
        assigned_orders,
        completed_orders,
        image_url: image_url.to_string(),
    }
}

fn order(
    customer: CustomerInfo,
    items: Vec<OrderItem>,
    status: OrderStatus,
    delivery_staff: Option<StaffRef>,
    created_at: DateTime<Utc>,
) -> Order {
    let total_cents = items.iter().map(|i| i.line_total().cents()).sum();
    Order {
        id: Uuid::new_v4().to_string(),
        order_number: generate_order_number(created_at),
        customer,
        items,
        total_cents,
        status,
        delivery_staff,
        created_at,
        updated_at: created_at,
    }
}

fn line(product: &Product, quantity: i64) -> OrderItem {
    OrderItem {
        product_id: product.id.clone(),
        name: product.name.clone(),
        quantity,
        unit_price_cents: product.price_cents,
    }
}

fn customer(name: &str, address: &str, contact: &str) -> CustomerInfo {
    CustomerInfo {
        name: name.to_string(),
        address: address.to_string(),
        contact: contact.to_string(),
    }
}

fn staff_ref(staff: &DeliveryStaff) -> StaffRef {
    StaffRef {
        id: staff.id.clone(),
        name: staff.name.clone(),
    }
}

/// Builds the full mock dataset.
pub fn seed_data() -> SeedData {
    let catalog_day = Utc::now() - Duration::days(30);

    let ibuprofen = product(
        "Ibuprofen",
        "Pain reliever, 200mg tablets",
        "Pain Relief",
        899,
        150,
        "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae",
        catalog_day,
    );
    let amoxicillin = product(
        "Amoxicillin",
        "Antibiotic, 500mg capsules",
        "Antibiotics",
        1299,
        75,
        "https://images.unsplash.com/photo-1471864190281-a93a3070b6de",
        catalog_day,
    );
    let loratadine = product(
        "Loratadine",
        "Antihistamine, 10mg tablets",
        "Allergy",
        999,
        120,
        "https://images.unsplash.com/photo-1550572017-9aedf5cbc4ba",
        catalog_day,
    );
    let omeprazole = product(
        "Omeprazole",
        "Acid reducer, 20mg capsules",
        "Digestive Health",
        1599,
        90,
        "https://images.unsplash.com/photo-1587854692152-cbe660dbde88",
        catalog_day,
    );
    let acetaminophen = product(
        "Acetaminophen",
        "Pain reliever, 500mg tablets",
        "Pain Relief",
        799,
        200,
        "https://images.unsplash.com/photo-1547489432-cf93fa6c71ee",
        catalog_day,
    );
    let salbutamol = product(
        "Salbutamol Inhaler",
        "Bronchodilator, 100mcg",
        "Respiratory",
        2499,
        35,
        "https://images.unsplash.com/photo-1580281657702-257584239a55",
        catalog_day,
    );
    let aspirin = product(
        "Aspirin",
        "Blood thinner, 81mg tablets",
        "Heart Health",
        699,
        250,
        "https://images.unsplash.com/photo-1628771065518-0d82f1938462",
        catalog_day,
    );
    let metformin = product(
        "Metformin",
        "Diabetes medication, 500mg tablets",
        "Diabetes",
        1199,
        100,
        "https://images.unsplash.com/photo-1603807008857-ad66b70431e2",
        catalog_day,
    );

    let john = staff(
        "John Smith",
        "555-123-4567",
        2,
        15,
        "https://images.unsplash.com/photo-1633332755192-727a05c4013d",
    );
    let michael = staff(
        "Michael Johnson",
        "555-987-6543",
        1,
        23,
        "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde",
    );
    let david = staff(
        "David Wilson",
        "555-456-7890",
        0,
        18,
        "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e",
    );

    // assigned_orders above must stay in step with the orders below:
    // John carries the assigned and one in-transit order, Michael the other
    // in-transit order, David only a delivered one.
    let orders = vec![
        order(
            customer("Emma Thompson", "123 Maple St", "555-111-2222"),
            vec![line(&ibuprofen, 2), line(&loratadine, 1)],
            OrderStatus::Pending,
            None,
            Utc::now() - Duration::days(7),
        ),
        order(
            customer("Robert Davis", "456 Oak Ave", "555-333-4444"),
            vec![line(&acetaminophen, 1), line(&aspirin, 2)],
            OrderStatus::Assigned,
            Some(staff_ref(&john)),
            Utc::now() - Duration::days(6),
        ),
        order(
            customer("Lisa Wilson", "789 Pine Ln", "555-555-6666"),
            vec![line(&omeprazole, 1)],
            OrderStatus::InTransit,
            Some(staff_ref(&john)),
            Utc::now() - Duration::days(5),
        ),
        order(
            customer("James Brown", "101 Cedar Rd", "555-777-8888"),
            vec![line(&salbutamol, 1), line(&metformin, 1)],
            OrderStatus::InTransit,
            Some(staff_ref(&michael)),
            Utc::now() - Duration::days(4),
        ),
        order(
            customer("Sarah Miller", "202 Elm St", "555-999-0000"),
            vec![line(&amoxicillin, 1)],
            OrderStatus::Delivered,
            Some(staff_ref(&david)),
            Utc::now() - Duration::days(7),
        ),
    ];

    SeedData {
        products: vec![
            ibuprofen,
            amoxicillin,
            loratadine,
            omeprazole,
            acetaminophen,
            salbutamol,
            aspirin,
            metformin,
        ],
        staff: vec![john, michael, david],
        orders,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let data = seed_data();
        assert_eq!(data.products.len(), 8);
        assert_eq!(data.staff.len(), 3);
        assert_eq!(data.orders.len(), 5);
    }

    #[test]
    fn test_seed_ids_are_distinct() {
        let data = seed_data();
        let mut ids: Vec<&str> = data
            .products
            .iter()
            .map(|p| p.id.as_str())
            .chain(data.staff.iter().map(|s| s.id.as_str()))
            .chain(data.orders.iter().map(|o| o.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_seed_totals_match_lines() {
        let data = seed_data();
        for order in &data.orders {
            let expected: i64 = order.items.iter().map(|i| i.line_total().cents()).sum();
            assert_eq!(order.total_cents, expected);
        }
        // Spot-check the pending order: 2×$8.99 + 1×$9.99 = $27.97
        assert_eq!(data.orders[0].total_cents, 2797);
    }

    #[test]
    fn test_seed_counters_match_orders() {
        let data = seed_data();
        for staff in &data.staff {
            let active = data
                .orders
                .iter()
                .filter(|o| o.is_assigned_to(&staff.id) && o.status.is_active())
                .count() as i64;
            assert_eq!(
                staff.assigned_orders, active,
                "{} counter drifted from seeded orders",
                staff.name
            );
        }
    }

    #[test]
    fn test_seed_order_lines_reference_seeded_products() {
        let data = seed_data();
        for order in &data.orders {
            for item in &order.items {
                assert!(
                    data.products.iter().any(|p| p.id == item.product_id),
                    "order line references unknown product"
                );
            }
        }
    }

    #[test]
    fn test_seed_covers_reachable_statuses() {
        let data = seed_data();
        for status in [
            OrderStatus::Pending,
            OrderStatus::Assigned,
            OrderStatus::InTransit,
            OrderStatus::Delivered,
        ] {
            assert!(data.orders.iter().any(|o| o.status == status));
        }
        // Cancelled is display-only; nothing seeds it.
        assert!(!data.orders.iter().any(|o| o.status == OrderStatus::Cancelled));
    }
}
