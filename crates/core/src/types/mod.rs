//! Core types for Bookshop.
//!
//! This module provides the domain model shared by the storefront and the
//! admin console, plus the phone number helpers used during checkout.

pub mod book;
pub mod cart;
pub mod id;
pub mod phone;

pub use book::{BookDraft, BookRecord};
pub use cart::{Cart, CartLineItem};
pub use id::BookId;
