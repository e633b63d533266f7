//! Books management: API client, table projection, form editor.

pub mod client;
pub mod editor;
pub mod table;
