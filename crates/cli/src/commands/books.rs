//! Book catalogue management commands.

use std::io::{self, Write};

use bookshop_admin::{AdminConfig, BookForm, BooksClient};
use bookshop_core::{BookDraft, BookId};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn client() -> Result<BooksClient> {
    Ok(BooksClient::new(&AdminConfig::from_env()?))
}

fn draft(title: &str, author: &str, price: &str, image: &str) -> Result<BookDraft> {
    let form = BookForm {
        id: None,
        title: title.to_string(),
        author: author.to_string(),
        price: price.to_string(),
        image: image.to_string(),
    };
    form.draft()
        .ok_or_else(|| "all fields are required and the price must be positive".into())
}

/// Create a book; the backend assigns the id.
pub async fn create(title: &str, author: &str, price: &str, image: &str) -> Result<()> {
    let record = client()?.create(&draft(title, author, price, image)?).await?;
    println!(
        "Created book {}: {} by {} (${:.2})",
        record.id, record.title, record.author, record.price
    );
    Ok(())
}

/// Update a book's fields.
pub async fn update(id: i64, title: &str, author: &str, price: &str, image: &str) -> Result<()> {
    client()?
        .update(BookId::new(id), &draft(title, author, price, image)?)
        .await?;
    println!("Updated book {id}.");
    Ok(())
}

/// Delete a book, asking for confirmation unless `yes` is set.
pub async fn delete(id: i64, yes: bool) -> Result<()> {
    if !yes && !confirm(id)? {
        println!("Aborted.");
        return Ok(());
    }

    client()?.delete(BookId::new(id)).await?;
    println!("Deleted book {id}.");
    Ok(())
}

fn confirm(id: i64) -> Result<bool> {
    print!("Delete book {id}? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
