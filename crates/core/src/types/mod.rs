//! Core types for HearHut.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod rating;
pub mod shipping;

pub use email::{Email, EmailError};
pub use id::{OrderId, ProductId};
pub use price::{CurrencyCode, Price};
pub use rating::Rating;
pub use shipping::ShippingMethod;
