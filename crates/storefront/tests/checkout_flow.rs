//! End-to-end checkout flow tests against an in-process mock backend.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use url::Url;

use bookshop_core::BookId;
use bookshop_storefront::{
    CART_STORAGE_KEY, CartStore, CheckoutClient, CheckoutPage, MemoryStorage, PayOutcome, Storage,
    StorefrontConfig,
};

/// How the mock backend answers the checkout request.
#[derive(Clone, Copy)]
enum Mode {
    Success,
    Declined,
    ServerError,
}

#[derive(Clone)]
struct MockState {
    hits: Arc<AtomicUsize>,
    mode: Mode,
}

async fn checkout_handler(State(state): State<MockState>, Json(body): Json<Value>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match state.mode {
        Mode::ServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "boom"})),
        ),
        Mode::Declined => (StatusCode::OK, Json(json!({"status": "failed"}))),
        Mode::Success => {
            // Mirror the real backend: total the submitted cart and mint a
            // transaction id.
            let amount: f64 = body["cart"]
                .as_array()
                .cloned()
                .unwrap_or_default()
                .iter()
                .map(|line| {
                    line["price"].as_f64().unwrap_or(0.0) * line["quantity"].as_f64().unwrap_or(1.0)
                })
                .sum();
            (
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "transaction_id": "TX12345ABCDE",
                    "amount": amount,
                })),
            )
        }
    }
}

/// Start a mock backend on an ephemeral port; returns its base URL and the
/// request counter.
async fn start_backend(mode: Mode) -> (Url, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/checkout", post(checkout_handler))
        .with_state(MockState {
            hits: Arc::clone(&hits),
            mode,
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (Url::parse(&format!("http://{addr}")).unwrap(), hits)
}

fn page_over(storage: &mut MemoryStorage, base_url: Url) -> CheckoutPage<&mut MemoryStorage> {
    let config = StorefrontConfig::new(base_url);
    CheckoutPage::new(CartStore::new(storage), CheckoutClient::new(&config))
}

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[tokio::test]
async fn empty_cart_pay_issues_no_request() {
    let (base_url, hits) = start_backend(Mode::Success).await;
    let mut storage = MemoryStorage::new();
    let mut page = page_over(&mut storage, base_url);

    let outcome = page.pay(None).await;

    assert_eq!(outcome, PayOutcome::EmptyCart);
    assert_eq!(outcome.notice(), Some("Your cart is empty!"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invalid_phone_preempts_everything() {
    let (base_url, hits) = start_backend(Mode::Success).await;
    let mut storage = MemoryStorage::new();
    let mut page = page_over(&mut storage, base_url);
    page.add_to_cart(BookId::new(1), "The Sea", price(1299));

    let outcome = page.pay(Some("12345")).await;

    assert_eq!(outcome, PayOutcome::InvalidPhone);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(page.view().lines.len(), 1);
}

#[tokio::test]
async fn successful_checkout_clears_cart_and_renders_empty() {
    let (base_url, hits) = start_backend(Mode::Success).await;
    let mut storage = MemoryStorage::new();
    {
        let mut page = page_over(&mut storage, base_url);
        page.add_to_cart(BookId::new(1), "The Sea", price(1299));
        page.add_to_cart(BookId::new(2), "Persuasion", price(899));

        let outcome = page.pay(Some("0712 345 678")).await;

        match outcome {
            PayOutcome::Paid(receipt) => {
                assert_eq!(receipt.transaction_id, "TX12345ABCDE");
                // The amount crosses the wire as a JSON number; compare at
                // display precision.
                assert_eq!(receipt.amount.round_dp(2), price(2198));
            }
            other => panic!("expected Paid, got {other:?}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let view = page.view();
        assert!(view.lines.is_empty());
        assert_eq!(view.total, "$0.00");

        let message = page.payment_result().unwrap();
        assert!(message.contains("TX12345ABCDE"));
        assert!(message.contains("$21.98"));
    }

    // The persisted slot is gone, not just emptied.
    assert!(storage.get(CART_STORAGE_KEY).is_none());
}

#[tokio::test]
async fn declined_response_leaves_cart_for_retry() {
    let (base_url, _hits) = start_backend(Mode::Declined).await;
    let mut storage = MemoryStorage::new();
    {
        let mut page = page_over(&mut storage, base_url);
        page.add_to_cart(BookId::new(1), "The Sea", price(1299));

        let outcome = page.pay(None).await;

        assert_eq!(outcome, PayOutcome::Failed);
        assert_eq!(page.payment_result(), Some("Payment failed. Try again."));
        assert_eq!(page.view().lines.len(), 1);
    }
    assert!(storage.get(CART_STORAGE_KEY).is_some());
}

#[tokio::test]
async fn server_error_leaves_cart_untouched() {
    let (base_url, _hits) = start_backend(Mode::ServerError).await;
    let mut storage = MemoryStorage::new();
    let mut page = page_over(&mut storage, base_url);
    page.add_to_cart(BookId::new(5), "Dust Tracks", price(1500));

    assert_eq!(page.pay(None).await, PayOutcome::Failed);
    assert_eq!(page.view().total, "$15.00");
}

#[tokio::test]
async fn unreachable_backend_is_a_plain_failure() {
    // Nothing listens on this port.
    let base_url = Url::parse("http://127.0.0.1:1").unwrap();
    let mut storage = MemoryStorage::new();
    let mut page = page_over(&mut storage, base_url);
    page.add_to_cart(BookId::new(1), "The Sea", price(1299));

    assert_eq!(page.pay(None).await, PayOutcome::Failed);
    assert_eq!(page.view().lines.len(), 1);
}
