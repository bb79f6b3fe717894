//! # Store Walkthrough
//!
//! Drives a seeded store through the full demo flow: customer login, browse,
//! cart, checkout, admin assignment, delivery status advancement.
//!
//! ## Usage
//! ```bash
//! cargo run -p pharmex-store --bin demo
//!
//! # Verbose logging
//! RUST_LOG=debug cargo run -p pharmex-store --bin demo
//! ```

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use pharmex_core::{CustomerInfo, OrderStatus};
use pharmex_store::{ops, Store, StoreError};

fn main() -> Result<(), StoreError> {
    init_tracing();

    let store = Store::seeded();
    info!(pharmacy = %store.config.pharmacy_name, "Store seeded");

    // Customer: log in, browse the catalog, fill the cart.
    ops::session::login_customer(&store.session, "emma");

    let filter = ops::product::ProductFilter {
        category: Some("Pain Relief".to_string()),
        ..ops::product::ProductFilter::default()
    };
    let pain_relief = ops::product::search_products(&store.catalog, &filter)?;
    info!(count = pain_relief.len(), "Pain Relief products in catalog");

    for product in &pain_relief {
        ops::cart::add_to_cart(&store.catalog, &store.cart, &product.id, None)?;
    }
    let cart = ops::cart::get_cart(&store.cart);
    info!(
        lines = cart.items.len(),
        total = %store.config.format_currency(cart.totals.total_cents),
        "Cart ready for checkout"
    );

    // Checkout.
    let placed = ops::order::place_order(
        &store.cart,
        &store.orders,
        CustomerInfo {
            name: "Emma Thompson".to_string(),
            address: "123 Maple St".to_string(),
            contact: "555-111-2222".to_string(),
        },
    )?;

    // Admin: assign the new order to someone with spare capacity.
    ops::session::login_admin(&store.session, "admin");

    let dashboard = ops::order::admin_dashboard(&store.catalog, &store.delivery, &store.orders);
    info!(
        orders = dashboard.total_orders,
        pending = dashboard.pending_orders,
        "Admin dashboard"
    );

    let available = ops::order::available_delivery_staff(&store.delivery);
    let chosen = available
        .first()
        .ok_or_else(|| StoreError::not_found("Delivery staff", "available"))?;
    ops::order::assign_order(&store.orders, &store.delivery, &placed.id, &chosen.id)?;

    // Delivery staff: pick up and deliver.
    let courier = ops::session::login_delivery(&store.session, &store.delivery, "john")?;
    ops::order::update_order_status(
        &store.orders,
        &store.delivery,
        &placed.id,
        OrderStatus::InTransit,
    )?;
    ops::order::update_order_status(
        &store.orders,
        &store.delivery,
        &placed.id,
        OrderStatus::Delivered,
    )?;

    let workload = ops::order::delivery_dashboard(&store.orders, &courier.id);
    info!(
        active = workload.active_orders,
        delivered_today = workload.delivered_today,
        "Delivery dashboard"
    );

    ops::session::logout(&store.session);

    // Final state, as the frontend would hydrate it.
    println!("{}", serde_json::to_string_pretty(&store.snapshot()).unwrap_or_default());
    Ok(())
}

/// Initializes logging with an env-filter override (`RUST_LOG`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();
}
