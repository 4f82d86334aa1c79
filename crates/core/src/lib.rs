//! HearHut Core - Shared types library.
//!
//! This crate provides common types used across all HearHut components:
//! - `storefront` - Cart, checkout, identity and order state machines
//! - `cli` - Command-line inspection tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, ratings
//!   and shipping methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
