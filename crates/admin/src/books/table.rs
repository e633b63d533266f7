//! The books table as the admin console displays it.
//!
//! Rows hold the displayed cell text only; the row id is the single source
//! of truth correlating a row with its backend record. No other local copy
//! of a book is kept.

use rust_decimal::Decimal;

use bookshop_core::{BookDraft, BookId, BookRecord};

/// One visible table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Displayed price cell, currency symbol included, e.g. `"$9.99"`.
    pub price: String,
    pub image: String,
}

impl BookRow {
    /// Build a row from a backend record, formatting the price cell.
    #[must_use]
    pub fn from_record(record: &BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            author: record.author.clone(),
            price: format_price_cell(record.price),
            image: record.image.clone(),
        }
    }
}

/// Format a price for its table cell.
fn format_price_cell(price: Decimal) -> String {
    format!("${price:.2}")
}

/// The visible books table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooksTable {
    rows: Vec<BookRow>,
}

impl BooksTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build the table from the records the server rendered initially.
    #[must_use]
    pub fn from_records(records: &[BookRecord]) -> Self {
        Self {
            rows: records.iter().map(BookRow::from_record).collect(),
        }
    }

    /// Look up the row for `id`.
    #[must_use]
    pub fn row(&self, id: BookId) -> Option<&BookRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Append a row for a freshly created record.
    pub fn append(&mut self, record: &BookRecord) {
        self.rows.push(BookRow::from_record(record));
    }

    /// Patch the displayed cells of the row for `id` in place.
    ///
    /// Returns `false` when no such row exists; the table is unchanged.
    pub fn patch(&mut self, id: BookId, draft: &BookDraft) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        row.title = draft.title.clone();
        row.author = draft.author.clone();
        row.price = format_price_cell(draft.price);
        row.image = draft.image.clone();
        true
    }

    /// Remove the row for `id`.
    ///
    /// Returns `false` when no such row exists.
    pub fn remove(&mut self, id: BookId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// Number of visible rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }
}
