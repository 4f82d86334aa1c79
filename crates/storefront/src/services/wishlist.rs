//! Wishlist store.
//!
//! A set of product ids with toggle semantics. Unlike carts and orders the
//! wishlist is keyed globally, not per identity - preserved as observed
//! behavior pending a product decision (see DESIGN.md).

use hear_hut_core::ProductId;

use crate::storage::{self, StorageBackend, keys};

/// Wishlist store over the persisted key-value backend.
pub struct Wishlist<'a> {
    storage: &'a dyn StorageBackend,
}

impl<'a> Wishlist<'a> {
    /// Create a wishlist store over the given backend.
    #[must_use]
    pub const fn new(storage: &'a dyn StorageBackend) -> Self {
        Self { storage }
    }

    /// All wished-for products, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<ProductId> {
        storage::read_or_default(self.storage, keys::WISHLIST)
    }

    /// Whether a product is wished for.
    #[must_use]
    pub fn contains(&self, product: &ProductId) -> bool {
        self.items().iter().any(|p| p == product)
    }

    /// Toggle a product: present entries are removed, absent ones appended.
    /// Returns whether the product is wished for after the toggle.
    pub fn toggle(&self, product: &ProductId) -> bool {
        let mut items = self.items();
        let present = items.iter().any(|p| p == product);

        if present {
            items.retain(|p| p != product);
        } else {
            items.push(product.clone());
        }
        storage::write(self.storage, keys::WISHLIST, &items);

        !present
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_adds_then_removes() {
        let store = MemoryStore::default();
        let wishlist = Wishlist::new(&store);
        let id = ProductId::from("apple-airpods-4");

        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));

        assert!(!wishlist.toggle(&id));
        assert!(!wishlist.contains(&id));
    }

    #[test]
    fn test_no_duplicates() {
        let store = MemoryStore::default();
        let wishlist = Wishlist::new(&store);
        let id = ProductId::from("jbl-flip-6");

        wishlist.toggle(&id);
        wishlist.toggle(&id);
        wishlist.toggle(&id);
        assert_eq!(wishlist.items().len(), 1);
    }
}
