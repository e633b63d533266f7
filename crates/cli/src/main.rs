//! Bookshop CLI - drive the storefront and admin behavior from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Format or validate a checkout phone number
//! bookshop phone format "+255712345678"
//! bookshop phone check "0712-345-678"
//!
//! # Work the cart (persisted under --data-dir)
//! bookshop cart add --id 1 --title "The Sea" --price 12.99
//! bookshop cart show
//! bookshop cart clear
//!
//! # Pay for the cart against the configured backend
//! bookshop checkout --phone "0712345678"
//!
//! # Manage the catalogue
//! bookshop book create --title T --author A --price 9.99 --image t.jpg
//! bookshop book update --id 3 --title T --author A --price 9.99 --image t.jpg
//! bookshop book delete --id 3 --yes
//! ```
//!
//! # Environment Variables
//!
//! - `BOOKSHOP_API_URL` - Backend base URL for checkout
//! - `BOOKSHOP_ADMIN_API_URL` - Backend base URL for book management

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bookshop")]
#[command(author, version, about = "Bookshop CLI")]
struct Cli {
    /// Directory holding the persisted cart slot.
    #[arg(long, default_value = ".bookshop", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Phone number helpers
    Phone {
        #[command(subcommand)]
        action: PhoneAction,
    },
    /// Work the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Pay for the current cart
    Checkout {
        /// Mobile-money phone number (validated before paying)
        #[arg(long)]
        phone: Option<String>,
    },
    /// Manage the book catalogue
    Book {
        #[command(subcommand)]
        action: BookAction,
    },
}

#[derive(Subcommand)]
enum PhoneAction {
    /// Normalize a raw value into display form
    Format { raw: String },
    /// Check whether a value is an accepted number
    Check { value: String },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one copy of a book
    Add {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: String,
    },
    /// Print the cart as the checkout page renders it
    Show,
    /// Remove the persisted cart slot
    Clear,
}

#[derive(Subcommand)]
enum BookAction {
    /// Create a book; the backend assigns the id
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        image: String,
    },
    /// Update a book's fields
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        image: String,
    },
    /// Delete a book
    Delete {
        #[arg(long)]
        id: i64,
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Phone { action } => match action {
            PhoneAction::Format { raw } => {
                println!("{}", bookshop_core::phone::format(&raw));
            }
            PhoneAction::Check { value } => {
                if bookshop_core::phone::is_valid(&value) {
                    println!("valid");
                } else {
                    println!("invalid");
                    std::process::exit(1);
                }
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Add { id, title, price } => {
                commands::cart::add(&cli.data_dir, id, &title, &price)?;
            }
            CartAction::Show => commands::cart::show(&cli.data_dir),
            CartAction::Clear => commands::cart::clear(&cli.data_dir),
        },
        Commands::Checkout { phone } => {
            commands::cart::checkout(&cli.data_dir, phone.as_deref()).await?;
        }
        Commands::Book { action } => match action {
            BookAction::Create {
                title,
                author,
                price,
                image,
            } => commands::books::create(&title, &author, &price, &image).await?,
            BookAction::Update {
                id,
                title,
                author,
                price,
                image,
            } => commands::books::update(id, &title, &author, &price, &image).await?,
            BookAction::Delete { id, yes } => commands::books::delete(id, yes).await?,
        },
    }
    Ok(())
}
