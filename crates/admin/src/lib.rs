//! Bookshop Admin - book catalogue management behavior.
//!
//! Wires the admin console's form and per-row buttons to the backend's
//! books resource, patching the visible table in place on success. The
//! backend is assumed to expose `POST /admin/books`,
//! `PUT /admin/books/{id}` and `DELETE /admin/books/{id}`.
//!
//! # Modules
//!
//! - [`books`] - API client, table projection, and the form editor
//! - [`config`] - Environment-derived configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod books;
pub mod config;

pub use books::client::{BooksApiError, BooksClient};
pub use books::editor::{BookEditor, BookForm, DeleteOutcome, SubmitOutcome};
pub use books::table::{BookRow, BooksTable};
pub use config::{AdminConfig, ConfigError};
