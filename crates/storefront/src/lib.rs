//! Bookshop Storefront - shopper-facing behavior layer.
//!
//! This crate wires the shopper's actions to the backend collaborator
//! contracts: cart persistence in a key-value slot, projection of the cart
//! into display form, the mocked checkout/payment flow, and the sidebar
//! toggle. It implements no server-side logic; the backend is assumed to
//! expose `POST /checkout`.
//!
//! # Modules
//!
//! - [`cart`] - Persisted cart store and its view projection
//! - [`checkout`] - The pay action and its backend client
//! - [`sidebar`] - Open/closed toggle state
//! - [`config`] - Environment-derived configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod sidebar;

pub use cart::store::{CartStore, FileStorage, MemoryStorage, Storage, CART_STORAGE_KEY};
pub use cart::view::CartView;
pub use checkout::{CheckoutClient, CheckoutError, CheckoutPage, PayOutcome, Receipt};
pub use config::{ConfigError, StorefrontConfig};
pub use sidebar::{ClickTarget, Sidebar};
