//! Per-identity cart store.
//!
//! Exactly one cart is active at a time, chosen by the current session:
//! the storage key is re-derived from `auth_user` on every operation, so a
//! sign-in or sign-out swaps the visible cart wholesale. Guest and
//! per-user carts are strictly isolated and never merged.

use crate::models::CartItem;
use crate::storage::{self, StorageBackend, keys};

/// Cart store over the persisted key-value backend.
pub struct CartStore<'a> {
    storage: &'a dyn StorageBackend,
}

impl<'a> CartStore<'a> {
    /// Create a cart store over the given backend.
    #[must_use]
    pub const fn new(storage: &'a dyn StorageBackend) -> Self {
        Self { storage }
    }

    /// Storage key of the active cart, derived from the current session.
    fn active_key(&self) -> String {
        let user: Option<crate::models::CurrentUser> =
            storage::read(self.storage, keys::AUTH_USER);
        keys::cart(user.as_ref().map(|u| &u.email))
    }

    /// The active cart's line items, empty if none persisted.
    #[must_use]
    pub fn active_cart(&self) -> Vec<CartItem> {
        storage::read_or_default(self.storage, &self.active_key())
    }

    /// Append a line item. Duplicates are allowed as separate lines;
    /// adding is an append, never a merge by product id.
    pub fn add_item(&self, item: CartItem) {
        let key = self.active_key();
        let mut cart: Vec<CartItem> = storage::read_or_default(self.storage, &key);
        cart.push(item);
        storage::write(self.storage, &key, &cart);
        tracing::debug!(key, lines = cart.len(), "cart item added");
    }

    /// Remove the line at `index`. Out-of-range indices are a silent no-op.
    pub fn remove_item(&self, index: usize) {
        let key = self.active_key();
        let mut cart: Vec<CartItem> = storage::read_or_default(self.storage, &key);
        if index < cart.len() {
            cart.remove(index);
            storage::write(self.storage, &key, &cart);
        }
    }

    /// Adjust the quantity of the line at `index` by `delta`, clamping at
    /// a floor of 1. There is no ceiling. Out-of-range indices are a
    /// silent no-op.
    pub fn set_quantity(&self, index: usize, delta: i32) {
        let key = self.active_key();
        let mut cart: Vec<CartItem> = storage::read_or_default(self.storage, &key);
        if let Some(item) = cart.get_mut(index) {
            let adjusted = i64::from(item.quantity) + i64::from(delta);
            item.quantity = u32::try_from(adjusted.max(1)).unwrap_or(1);
            storage::write(self.storage, &key, &cart);
        }
    }

    /// Empty the active cart.
    pub fn clear(&self) {
        storage::write::<Vec<CartItem>>(self.storage, &self.active_key(), &Vec::new());
    }

    /// Number of lines in the active cart (the cart-badge count).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.active_cart().len()
    }
}
