//! JSON document store.
//!
//! All persistence is one flat JSON file holding the whole [`AppDocument`].
//! Every load is a full-file read + parse; every save is a full-file
//! rewrite, made atomic by writing a temp file and renaming it over the
//! target.
//!
//! # Concurrency
//!
//! Mutations go through [`JsonStore::update`], which holds an async mutex
//! across the whole load-modify-save cycle. That serializes writers inside
//! the process and closes the classic read-modify-write lost-update race.
//! Plain reads take a lock-free snapshot via [`JsonStore::load`].

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::models::AppDocument;

/// Error type for store operations.
///
/// Only `save` surfaces errors; a failed `load` degrades to the default
/// document instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whole-document JSON store backed by a single file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Create a store for the given document path. The file is not touched
    /// until the first save.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load the persisted document.
    ///
    /// A missing or malformed file yields [`AppDocument::default`] rather
    /// than an error, so a fresh deployment starts from an empty catalog.
    pub async fn load(&self) -> AppDocument {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return AppDocument::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read document, using default");
                return AppDocument::default();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Malformed document, using default");
            AppDocument::default()
        })
    }

    /// Persist the full document, overwriting any previous content.
    ///
    /// Writes to a sibling temp file first and renames it into place, so a
    /// crash mid-write never leaves a truncated document behind. The parent
    /// directory is created on demand.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or any filesystem step fails.
    pub async fn save(&self, doc: &AppDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Run a mutation under the write lock: load, apply `f`, save.
    ///
    /// The closure's return value is passed through, so callers can both
    /// mutate the document and extract a result in one cycle.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the save fails. The mutation itself is
    /// infallible; all input validation happens before the lock is taken.
    pub async fn update<T>(
        &self,
        f: impl FnOnce(&mut AppDocument) -> T + Send,
    ) -> Result<T, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load().await;
        let out = f(&mut doc);
        self.save(&doc).await?;
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use findeasy_core::ProductId;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::Product;

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::open(dir.path().join("db.json"))
    }

    fn sample_product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: "shopify Product A".to_string(),
            price: Decimal::from(1200),
            seller: "shopify_seller".to_string(),
            image: "https://picsum.photos/seed/ab12/600/400".to_string(),
            source: "shopify".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let doc = store.load().await;
        assert_eq!(doc, AppDocument::default());
    }

    #[tokio::test]
    async fn test_malformed_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = JsonStore::open(path);
        let doc = store.load().await;
        assert_eq!(doc, AppDocument::default());
    }

    #[tokio::test]
    async fn test_save_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = AppDocument::default();
        doc.products.push(sample_product("prd_SHO_a1"));
        doc.settings.deals_enabled = false;

        store.save(&doc).await.unwrap();
        let loaded = store.load().await;
        assert_eq!(loaded, doc);

        // save(load()) is deep-equal to the original
        store.save(&loaded).await.unwrap();
        assert_eq!(store.load().await, doc);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("nested/data/db.json"));

        store.save(&AppDocument::default()).await.unwrap();
        assert!(dir.path().join("nested/data/db.json").exists());
    }

    #[tokio::test]
    async fn test_update_persists_mutation_and_returns_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let count = store
            .update(|doc| {
                doc.products.push(sample_product("prd_SHO_b2"));
                doc.products.len()
            })
            .await
            .unwrap();

        assert_eq!(count, 1);
        let doc = store.load().await;
        assert_eq!(doc.products.len(), 1);
        assert_eq!(doc.products.first().unwrap().id.as_str(), "prd_SHO_b2");
    }
}
