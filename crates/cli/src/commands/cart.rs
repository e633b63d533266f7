//! Cart and checkout commands.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use bookshop_core::BookId;
use bookshop_storefront::{
    CartStore, CartView, CheckoutClient, CheckoutPage, FileStorage, PayOutcome, StorefrontConfig,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn store(data_dir: &Path) -> CartStore<FileStorage> {
    CartStore::new(FileStorage::new(data_dir))
}

fn print_view(view: &CartView) {
    if view.lines.is_empty() {
        println!("(cart is empty)");
    }
    for line in &view.lines {
        println!("{line}");
    }
    println!("Total: {}", view.total);
}

/// Add one copy of a book and print the re-rendered cart.
pub fn add(data_dir: &Path, id: i64, title: &str, price: &str) -> Result<()> {
    let price = Decimal::from_str(price.trim())?;
    let cart = store(data_dir).add(BookId::new(id), title, price);
    print_view(&CartView::from(&cart));
    Ok(())
}

/// Print the cart as the checkout page renders it.
pub fn show(data_dir: &Path) {
    print_view(&CartView::from(&store(data_dir).load()));
}

/// Remove the persisted cart slot.
pub fn clear(data_dir: &Path) {
    store(data_dir).clear();
    println!("Cart cleared.");
}

/// Run the pay action against the configured backend.
pub async fn checkout(data_dir: &Path, phone: Option<&str>) -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    let mut page = CheckoutPage::new(store(data_dir), CheckoutClient::new(&config));

    let outcome = page.pay(phone).await;
    match outcome {
        PayOutcome::Paid(_) => {
            if let Some(message) = page.payment_result() {
                println!("{message}");
            }
            print_view(&page.view());
            Ok(())
        }
        PayOutcome::Failed => Err(page
            .payment_result()
            .unwrap_or("Payment failed. Try again.")
            .into()),
        aborted => Err(aborted.notice().unwrap_or("checkout aborted").into()),
    }
}
