//! Shopping cart data model.
//!
//! A cart is an ordered list of line items, one per distinct book id, in
//! first-add order. The cart itself is pure data; persistence lives in the
//! storefront crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::BookId;

/// One distinct book in a cart, with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Backend id of the book.
    pub id: BookId,
    /// Display title at the time of adding.
    pub title: String,
    /// Unit price. Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Number of copies, always at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An ordered sequence of line items.
///
/// Serializes transparently as a JSON array, which is also the persisted
/// slot format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one copy of a book.
    ///
    /// If a line with this id already exists its quantity is incremented;
    /// otherwise a new line is appended with quantity 1. A cart never holds
    /// two lines for the same id.
    pub fn add(&mut self, id: BookId, title: &str, price: Decimal) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLineItem {
                id,
                title: title.to_string(),
                price,
                quantity: 1,
            });
        }
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not copies).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The line items in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }
}
