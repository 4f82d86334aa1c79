//! Domain models persisted by the storefront stores.

pub mod cart;
pub mod identity;
pub mod order;

pub use cart::CartItem;
pub use identity::{AuthEvent, AuthEventKind, CurrentUser, Identity};
pub use order::{Order, ShippingForm};
