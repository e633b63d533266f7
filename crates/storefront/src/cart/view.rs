//! Cart display projection.
//!
//! A [`CartView`] is a pure projection of the cart into the strings the
//! checkout page shows. It is rebuilt in full on every cart mutation; there
//! is no incremental diffing.

use rust_decimal::Decimal;

use bookshop_core::Cart;

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// One formatted line per cart line item, in cart order.
    pub lines: Vec<String>,
    /// Formatted grand total, e.g. `"$21.98"`.
    pub total: String,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: format_price(Decimal::ZERO),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| {
                    format!(
                        "{} × {} - {}",
                        line.title,
                        line.quantity,
                        format_price(line.line_total())
                    )
                })
                .collect(),
            total: format_price(cart.total()),
        }
    }
}

/// Format an amount as a two-decimal dollar price string.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}
