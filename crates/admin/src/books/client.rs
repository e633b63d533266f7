//! API client for the backend books resource.

use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use bookshop_core::{BookDraft, BookId, BookRecord};

use crate::config::AdminConfig;

/// Errors that can occur when talking to the books resource.
#[derive(Debug, Error)]
pub enum BooksApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource returned a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource answered but did not accept the operation.
    #[error("operation rejected: status {0:?}")]
    Rejected(String),

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Response envelope for operations that return only a status.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
}

/// Response envelope for create, which returns the stored record.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    status: String,
    #[serde(default)]
    book: Option<BookRecord>,
}

/// Client for the backend books resource.
#[derive(Debug, Clone)]
pub struct BooksClient {
    client: reqwest::Client,
    base: String,
}

impl BooksClient {
    /// Create a new books client.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        let base = config.api_base_url.as_str().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/admin/books", self.base)
    }

    fn record_url(&self, id: BookId) -> String {
        format!("{}/admin/books/{id}", self.base)
    }

    /// Create a book; the backend assigns the id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx response, a
    /// rejected operation, or a success response without a record.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: &BookDraft) -> Result<BookRecord, BooksApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BooksApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CreateResponse = response
            .json()
            .await
            .map_err(|e| BooksApiError::Parse(e.to_string()))?;

        if body.status != "success" {
            return Err(BooksApiError::Rejected(body.status));
        }
        body.book
            .ok_or_else(|| BooksApiError::Parse("success response missing book".to_string()))
    }

    /// Update the book at `id` with new field values.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx response, or a
    /// rejected operation.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: BookId, draft: &BookDraft) -> Result<(), BooksApiError> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Delete the book at `id`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx response, or a
    /// rejected operation.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: BookId) -> Result<(), BooksApiError> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        Self::expect_success(response).await
    }

    async fn expect_success(response: reqwest::Response) -> Result<(), BooksApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BooksApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| BooksApiError::Parse(e.to_string()))?;

        if body.status == "success" {
            Ok(())
        } else {
            Err(BooksApiError::Rejected(body.status))
        }
    }
}
