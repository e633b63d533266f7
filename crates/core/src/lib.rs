//! Bookshop Core - Shared types library.
//!
//! This crate provides common types used across the Bookshop components:
//! - `storefront` - Shopper-facing cart and checkout behavior
//! - `admin` - Book catalogue management behavior
//! - `cli` - Command-line driver
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no storage. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Ids, cart and book records, phone number helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
