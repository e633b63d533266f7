//! The shared create/edit form and its state machine.
//!
//! One form serves both modes, keyed by the presence of the hidden record
//! id: id set means edit, id unset means create. All validation happens
//! before any request; on any failure the form stays open and unchanged so
//! the admin can correct input and retry.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use bookshop_core::{BookDraft, BookId};

use crate::books::client::BooksClient;
use crate::books::table::BooksTable;

/// The form's field values, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    /// Hidden record id; `Some` switches the form into edit mode.
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    /// Raw price field text, no currency symbol.
    pub price: String,
    pub image: String,
}

impl BookForm {
    /// Validate the fields into a request draft.
    ///
    /// Title, author and image must be non-empty after trimming, and the
    /// price must parse to a positive decimal.
    #[must_use]
    pub fn draft(&self) -> Option<BookDraft> {
        let title = self.title.trim();
        let author = self.author.trim();
        let image = self.image.trim();
        let price = Decimal::from_str(self.price.trim()).ok()?;

        if title.is_empty() || author.is_empty() || image.is_empty() || price <= Decimal::ZERO {
            return None;
        }

        Some(BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            price,
            image: image.to_string(),
        })
    }
}

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was sent.
    Invalid,
    /// A new record was created; its server-assigned id is returned and a
    /// row was appended to the table.
    Created(BookId),
    /// The record was updated and its row patched in place.
    Updated(BookId),
    /// Transport failure or the backend rejected the operation; the form
    /// is still open and unchanged.
    Failed,
}

impl SubmitOutcome {
    /// The blocking notice to surface, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Invalid => Some("All fields are required!"),
            Self::Failed => Some("Failed to save book."),
            Self::Created(_) | Self::Updated(_) => None,
        }
    }
}

/// Result of a delete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The admin declined the confirmation; no request was sent.
    Cancelled,
    /// The record is gone and its row removed.
    Deleted,
    /// Transport failure or the backend rejected the delete; the row is
    /// left in place.
    Failed,
}

impl DeleteOutcome {
    /// The blocking notice to surface, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Failed => Some("Failed to delete book."),
            Self::Cancelled | Self::Deleted => None,
        }
    }
}

/// The admin book editor: form visibility and submission.
#[derive(Debug, Clone, Default)]
pub struct BookEditor {
    form: BookForm,
    visible: bool,
}

impl BookEditor {
    /// Create an editor with a hidden, empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current field values.
    #[must_use]
    pub const fn form(&self) -> &BookForm {
        &self.form
    }

    /// Mutable access to the field values, for typing into the form.
    pub const fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    /// Whether the form is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Reveal the form in create mode: every field and the hidden id are
    /// cleared.
    pub fn show_create(&mut self) {
        self.form = BookForm::default();
        self.visible = true;
    }

    /// Reveal the form in edit mode, prefilled from the table row for
    /// `id`. The displayed price cell's currency symbol is stripped.
    ///
    /// Returns `false` (and changes nothing) when no such row exists.
    pub fn show_edit(&mut self, table: &BooksTable, id: BookId) -> bool {
        let Some(row) = table.row(id) else {
            return false;
        };
        self.form = BookForm {
            id: Some(id),
            title: row.title.clone(),
            author: row.author.clone(),
            price: row.price.trim_start_matches('$').to_string(),
            image: row.image.clone(),
        };
        self.visible = true;
        true
    }

    /// Hide the form without side effects.
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    /// Submit the form: update when the hidden id is set, create
    /// otherwise. On success the table is patched or appended and the form
    /// hides; on failure everything stays as it was.
    pub async fn submit(&mut self, client: &BooksClient, table: &mut BooksTable) -> SubmitOutcome {
        let Some(draft) = self.form.draft() else {
            return SubmitOutcome::Invalid;
        };

        if let Some(id) = self.form.id {
            match client.update(id, &draft).await {
                Ok(()) => {
                    table.patch(id, &draft);
                    self.hide();
                    SubmitOutcome::Updated(id)
                }
                Err(e) => {
                    warn!(%id, "book update failed: {e}");
                    SubmitOutcome::Failed
                }
            }
        } else {
            match client.create(&draft).await {
                Ok(record) => {
                    table.append(&record);
                    self.hide();
                    SubmitOutcome::Created(record.id)
                }
                Err(e) => {
                    warn!("book create failed: {e}");
                    SubmitOutcome::Failed
                }
            }
        }
    }

    /// Delete the record for `id` after interactive confirmation.
    ///
    /// `confirm` is only invoked once, before any request; declining sends
    /// nothing. On success exactly that row is removed from the table.
    pub async fn delete(
        &self,
        client: &BooksClient,
        table: &mut BooksTable,
        id: BookId,
        confirm: impl FnOnce() -> bool,
    ) -> DeleteOutcome {
        if !confirm() {
            return DeleteOutcome::Cancelled;
        }

        match client.delete(id).await {
            Ok(()) => {
                table.remove(id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(%id, "book delete failed: {e}");
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bookshop_core::BookRecord;

    fn table_with_one_row() -> BooksTable {
        BooksTable::from_records(&[BookRecord {
            id: BookId::new(3),
            title: "The Sea".to_string(),
            author: "J. Banville".to_string(),
            price: Decimal::new(1199, 2),
            image: "sea.jpg".to_string(),
        }])
    }

    #[test]
    fn test_show_create_clears_everything() {
        let mut editor = BookEditor::new();
        editor.form_mut().title = "leftover".to_string();
        editor.form_mut().id = Some(BookId::new(9));

        editor.show_create();

        assert!(editor.is_visible());
        assert_eq!(editor.form(), &BookForm::default());
    }

    #[test]
    fn test_show_edit_copies_row_and_strips_currency() {
        let mut editor = BookEditor::new();
        assert!(editor.show_edit(&table_with_one_row(), BookId::new(3)));

        assert!(editor.is_visible());
        let form = editor.form();
        assert_eq!(form.id, Some(BookId::new(3)));
        assert_eq!(form.title, "The Sea");
        assert_eq!(form.price, "11.99");
    }

    #[test]
    fn test_show_edit_missing_row_is_refused() {
        let mut editor = BookEditor::new();
        assert!(!editor.show_edit(&table_with_one_row(), BookId::new(99)));
        assert!(!editor.is_visible());
    }

    #[test]
    fn test_hide_has_no_side_effects() {
        let mut editor = BookEditor::new();
        editor.show_edit(&table_with_one_row(), BookId::new(3));
        editor.hide();

        assert!(!editor.is_visible());
        assert_eq!(editor.form().title, "The Sea");
    }

    #[test]
    fn test_draft_requires_all_fields() {
        let mut form = BookForm {
            id: None,
            title: "T".to_string(),
            author: "A".to_string(),
            price: "12.50".to_string(),
            image: "i.jpg".to_string(),
        };
        assert!(form.draft().is_some());

        form.title = "   ".to_string();
        assert!(form.draft().is_none());
    }

    #[test]
    fn test_draft_requires_positive_price() {
        let mut form = BookForm {
            id: None,
            title: "T".to_string(),
            author: "A".to_string(),
            price: "0".to_string(),
            image: "i.jpg".to_string(),
        };
        assert!(form.draft().is_none());

        form.price = "-1".to_string();
        assert!(form.draft().is_none());

        form.price = "not a number".to_string();
        assert!(form.draft().is_none());

        form.price = "0.01".to_string();
        assert!(form.draft().is_some());
    }
}
