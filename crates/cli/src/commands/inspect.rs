//! Store-file inspection: cart, orders, audit events.

use std::path::Path;

use hear_hut_core::{Email, ShippingMethod};
use hear_hut_storefront::services::auth::AuthService;
use hear_hut_storefront::services::cart::CartStore;
use hear_hut_storefront::services::orders::OrderArchive;
use hear_hut_storefront::services::pricing::{self, Totals};
use hear_hut_storefront::storage::{JsonFileStore, StorageError};

/// Show the cart visible to the current session in the store file.
pub fn cart(store_path: &Path) -> Result<(), StorageError> {
    let store = JsonFileStore::open(store_path)?;
    let auth = AuthService::new(&store);
    let cart = CartStore::new(&store);

    match auth.current_user() {
        Some(user) => println!("Cart for {} <{}>:", user.name, user.email),
        None => println!("Guest cart:"),
    }

    let items = cart.active_cart();
    if items.is_empty() {
        println!("  (empty)");
        return Ok(());
    }

    for (index, item) in items.iter().enumerate() {
        println!(
            "  [{index}] {} x{} - {}",
            item.name,
            item.quantity,
            item.line_total().display()
        );
    }

    let totals = pricing::compute_totals(&items, ShippingMethod::Standard);
    println!(
        "  {} items, subtotal {}, payable {} (standard shipping)",
        Totals::item_count(&items),
        totals.subtotal,
        totals.payable().display()
    );
    Ok(())
}

/// Show archived orders for an identity, or the guest archive.
pub fn orders(store_path: &Path, email: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::open(store_path)?;
    let archive = OrderArchive::new(&store);

    let email = email.map(Email::parse).transpose()?;
    let orders = archive.list(email.as_ref());

    if orders.is_empty() {
        println!("No orders archived.");
        return Ok(());
    }

    for order in orders {
        println!(
            "{}  {}  {} lines  {}",
            order.id,
            order.placed_at.format("%Y-%m-%d %H:%M"),
            order.items.len(),
            order.total.display()
        );
    }
    Ok(())
}

/// Show the auth audit trail, oldest first.
pub fn events(store_path: &Path) -> Result<(), StorageError> {
    let store = JsonFileStore::open(store_path)?;
    let auth = AuthService::new(&store);

    let events = auth.audit_events();
    if events.is_empty() {
        println!("No auth events recorded.");
        return Ok(());
    }

    for event in events {
        println!(
            "{}  {:?}  {}",
            event.time.format("%Y-%m-%d %H:%M:%S"),
            event.kind,
            event.email
        );
    }
    Ok(())
}
