//! Whole-file JSON persistence for the order collection.
//!
//! The persisted layout is a single document `{ "orders": [...] }`, written
//! in full on every save. Callers mutate through load → modify → save_all
//! with no locking: two concurrent writers race and the last save wins at
//! document granularity. Accepted for the expected handful of concurrent
//! users; anything stronger must serialize access above this crate.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use despacho_core::Order;

/// Persistence errors surfaced on the write path.
///
/// The read path never fails: a missing or corrupt document degrades to an
/// empty collection instead (see [`JsonFileStore::load`]).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write orders file: {0}")]
    Write(#[from] io::Error),

    #[error("failed to serialize orders: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk document shape.
#[derive(Debug, Default, Deserialize)]
struct OrdersDocument {
    orders: Vec<Order>,
}

#[derive(Serialize)]
struct OrdersDocumentRef<'a> {
    orders: &'a [Order],
}

/// JSON-file-backed order store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection in stored (insertion) order.
    ///
    /// A missing file means first boot and yields an empty collection
    /// silently; an unreadable or structurally invalid document also yields
    /// an empty collection, logged rather than propagated, so one bad file
    /// never takes the service down.
    pub fn load(&self) -> Vec<Order> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "orders file unreadable; falling back to an empty collection"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice::<OrdersDocument>(&raw) {
            Ok(doc) => doc.orders,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "orders file is not a valid collection; falling back to an empty collection"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the document with the given collection, serialized in full.
    /// No partial or append writes. Creates the parent directory on first
    /// save if needed.
    pub fn save_all(&self, orders: &[Order]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&OrdersDocumentRef { orders })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
