//! CLI command implementations.

pub mod books;
pub mod cart;
