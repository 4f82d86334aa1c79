//! HearHut Storefront core library.
//!
//! The storefront state machines behind the HearHut shop pages: identity
//! sign-up/sign-in, per-identity cart partitioning, deterministic pricing,
//! the checkout flow and the order archive. Page rendering, routing and the
//! payment gateway UI live in the embedding layer; this crate exposes the
//! stores and flows they consume.
//!
//! State persists through a [`storage::StorageBackend`] - a string-keyed
//! store of JSON-serialized values with the same contract as browser local
//! storage (synchronous writes, last-write-wins, no transactions).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod payment;
pub mod services;
pub mod state;
pub mod storage;
