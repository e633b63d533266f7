//! Persisted cart state.
//!
//! The cart lives in one named key-value slot that survives page reloads.
//! Storage is abstracted behind a trait so the store can run against an
//! in-memory map in tests and a directory of files in the CLI.
//!
//! Access is synchronous read-modify-write within a single callback turn;
//! no cross-tab consistency is provided or required.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use rust_decimal::Decimal;
use tracing::warn;

use bookshop_core::{BookId, Cart};

/// The fixed slot name holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// A named key-value persistence slot.
///
/// The interface is infallible on purpose: a slot that cannot be read
/// behaves as absent, and implementations log write problems rather than
/// surface them, so cart operations never fail in the shopper's face.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove the slot for `key` entirely.
    fn remove(&mut self, key: &str);
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

/// File-backed storage: one file per slot under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            warn!(root = %self.root.display(), "failed to create storage dir: {e}");
            return;
        }
        if let Err(e) = fs::write(self.slot_path(key), value) {
            warn!(key, "failed to persist slot: {e}");
        }
    }

    fn remove(&mut self, key: &str) {
        let path = self.slot_path(key);
        if path.exists()
            && let Err(e) = fs::remove_file(&path)
        {
            warn!(key, "failed to remove slot: {e}");
        }
    }
}

/// Reads and writes the persisted cart.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    storage: S,
}

impl<S: Storage> CartStore<S> {
    /// Create a store over the given storage backend.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the persisted cart.
    ///
    /// An absent or unparsable slot reads as an empty cart; this never
    /// errors and the shopper never sees corrupt state.
    #[must_use]
    pub fn load(&self) -> Cart {
        let Some(raw) = self.storage.get(CART_STORAGE_KEY) else {
            return Cart::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("discarding unparsable cart slot: {e}");
            Cart::new()
        })
    }

    /// Add one copy of a book and persist the result.
    ///
    /// Returns the updated cart so callers can re-render from it directly.
    pub fn add(&mut self, id: BookId, title: &str, price: Decimal) -> Cart {
        let mut cart = self.load();
        cart.add(id, title, price);
        self.persist(&cart);
        cart
    }

    /// Remove the persisted slot entirely.
    pub fn clear(&mut self) {
        self.storage.remove(CART_STORAGE_KEY);
    }

    fn persist(&mut self, cart: &Cart) {
        match serde_json::to_string(cart) {
            Ok(raw) => self.storage.set(CART_STORAGE_KEY, &raw),
            Err(e) => warn!("failed to serialize cart: {e}"),
        }
    }
}
