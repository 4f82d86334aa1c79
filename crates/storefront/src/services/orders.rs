//! Per-identity order archive.
//!
//! Append-only: finalized orders are read back, extended and rewritten
//! under the identity's key. No size bound, no deduplication and no query
//! surface beyond listing one identity's orders.

use hear_hut_core::Email;

use crate::models::Order;
use crate::storage::{self, StorageBackend, keys};

/// Order archive over the persisted key-value backend.
pub struct OrderArchive<'a> {
    storage: &'a dyn StorageBackend,
}

impl<'a> OrderArchive<'a> {
    /// Create an order archive over the given backend.
    #[must_use]
    pub const fn new(storage: &'a dyn StorageBackend) -> Self {
        Self { storage }
    }

    /// Append a finalized order to the identity's archive (or the guest
    /// archive when no identity is given).
    pub fn append(&self, email: Option<&Email>, order: &Order) {
        let key = keys::orders(email);
        let mut orders: Vec<Order> = storage::read_or_default(self.storage, &key);
        orders.push(order.clone());
        storage::write(self.storage, &key, &orders);
        tracing::info!(order_id = %order.id, key, "order archived");
    }

    /// All archived orders for the identity, oldest first.
    #[must_use]
    pub fn list(&self, email: Option<&Email>) -> Vec<Order> {
        storage::read_or_default(self.storage, &keys::orders(email))
    }
}
