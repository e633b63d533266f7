//! Cart persistence and display projection.

pub mod store;
pub mod view;
