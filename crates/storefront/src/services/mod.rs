//! Storefront services.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod mailer;
pub mod orders;
pub mod pricing;
pub mod wishlist;
