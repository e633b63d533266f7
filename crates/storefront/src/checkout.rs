//! Checkout flow: the pay action and its backend client.
//!
//! The backend simulates the payment; this side issues one request per pay
//! action, carrying the current cart as JSON. Nothing is retried and
//! nothing is debounced - overlapping attempts are allowed and the last
//! response to arrive wins.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{instrument, warn};

use bookshop_core::{phone, BookId, Cart};

use crate::cart::store::{CartStore, Storage};
use crate::cart::view::{format_price, CartView};
use crate::config::StorefrontConfig;

/// Errors that can occur while talking to the checkout endpoint.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Endpoint answered but did not accept the payment.
    #[error("payment not accepted: status {0:?}")]
    Declined(String),

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Confirmation data from a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_id: String,
    pub amount: Decimal,
}

/// Request body for `POST /checkout`.
#[derive(Debug, Serialize)]
struct CheckoutRequest<'a> {
    cart: &'a Cart,
}

/// Response body from `POST /checkout`.
#[derive(Debug, Deserialize)]
struct CheckoutResponse {
    status: String,
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    amount: Option<Decimal>,
}

/// Client for the backend checkout endpoint.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CheckoutClient {
    /// Create a new checkout client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let base = config.api_base_url.as_str().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{base}/checkout"),
        }
    }

    /// Submit the cart for payment.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx response, a
    /// response whose `status` is not `"success"`, or a body that cannot
    /// be parsed.
    #[instrument(skip(self, cart))]
    pub async fn pay(&self, cart: &Cart) -> Result<Receipt, CheckoutError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CheckoutRequest { cart })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CheckoutError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CheckoutResponse = response
            .json()
            .await
            .map_err(|e| CheckoutError::Parse(e.to_string()))?;

        if body.status != "success" {
            return Err(CheckoutError::Declined(body.status));
        }

        match (body.transaction_id, body.amount) {
            (Some(transaction_id), Some(amount)) => Ok(Receipt {
                transaction_id,
                amount,
            }),
            _ => Err(CheckoutError::Parse(
                "success response missing transaction_id or amount".to_string(),
            )),
        }
    }
}

/// Result of a pay action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayOutcome {
    /// A phone value was supplied and did not validate. Checked before
    /// anything else so it pre-empts the rest of the flow; the caller
    /// should surface the notice and refocus the phone field.
    InvalidPhone,
    /// The cart is empty; no request was issued.
    EmptyCart,
    /// Payment went through; the cart has been cleared.
    Paid(Receipt),
    /// Transport failure or the backend did not accept the payment. The
    /// cart is untouched so the action can simply be retried.
    Failed,
}

impl PayOutcome {
    /// The blocking notice to surface before any request, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPhone => Some(
                "Please enter a valid M-Pesa phone number (e.g., +2557XXXXXXXX or 07XXXXXXXX).",
            ),
            Self::EmptyCart => Some("Your cart is empty!"),
            Self::Paid(_) | Self::Failed => None,
        }
    }
}

/// The checkout page: cart store, backend client, and the last payment
/// result message.
#[derive(Debug)]
pub struct CheckoutPage<S> {
    store: CartStore<S>,
    client: CheckoutClient,
    payment_result: Option<String>,
}

impl<S: Storage> CheckoutPage<S> {
    /// Wire the page to a cart store and checkout client.
    #[must_use]
    pub const fn new(store: CartStore<S>, client: CheckoutClient) -> Self {
        Self {
            store,
            client,
            payment_result: None,
        }
    }

    /// Add one copy of a book and return the re-rendered cart view.
    pub fn add_to_cart(&mut self, id: BookId, title: &str, price: Decimal) -> CartView {
        let cart = self.store.add(id, title, price);
        CartView::from(&cart)
    }

    /// Project the current cart into display form.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from(&self.store.load())
    }

    /// The message shown in the payment result area, if a pay attempt has
    /// completed.
    #[must_use]
    pub fn payment_result(&self) -> Option<&str> {
        self.payment_result.as_deref()
    }

    /// Run the pay action.
    ///
    /// Preconditions are checked in order: a supplied phone value must
    /// validate, and the cart must be non-empty; either failure aborts
    /// before any network call. On success the persisted cart is cleared;
    /// on failure it is left untouched.
    pub async fn pay(&mut self, phone_value: Option<&str>) -> PayOutcome {
        if let Some(phone_value) = phone_value
            && !phone::is_valid(phone_value.trim())
        {
            return PayOutcome::InvalidPhone;
        }

        let cart = self.store.load();
        if cart.is_empty() {
            return PayOutcome::EmptyCart;
        }

        match self.client.pay(&cart).await {
            Ok(receipt) => {
                self.store.clear();
                self.payment_result = Some(format!(
                    "Payment successful! Transaction ID: {}. Total paid: {}.",
                    receipt.transaction_id,
                    format_price(receipt.amount)
                ));
                PayOutcome::Paid(receipt)
            }
            Err(e) => {
                warn!("checkout failed: {e}");
                self.payment_result = Some("Payment failed. Try again.".to_string());
                PayOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_base_url() {
        let config =
            StorefrontConfig::new(url::Url::parse("http://127.0.0.1:5000").unwrap());
        let client = CheckoutClient::new(&config);
        assert_eq!(client.endpoint, "http://127.0.0.1:5000/checkout");
    }

    #[test]
    fn test_outcome_notices() {
        assert!(PayOutcome::InvalidPhone.notice().is_some());
        assert!(PayOutcome::EmptyCart.notice().is_some());
        assert!(PayOutcome::Failed.notice().is_none());
    }

    #[test]
    fn test_success_response_parses() {
        let body: CheckoutResponse = serde_json::from_str(
            r#"{"status":"success","transaction_id":"ABC123","amount":21.98}"#,
        )
        .unwrap();
        assert_eq!(body.status, "success");
        assert_eq!(body.transaction_id.as_deref(), Some("ABC123"));
        assert_eq!(body.amount, Some(Decimal::new(2198, 2)));
    }
}
