use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

pub const PRODUCTS_FILE: &str = "products.json";
pub const INVENTORY_FILE: &str = "inventory.json";
pub const USER_PROFILES_FILE: &str = "user_profiles.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only view over the JSON catalog directory.
///
/// Every call goes back to disk, so edits to the files show up on the next
/// request without a restart.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    data_dir: PathBuf,
}

impl CatalogStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> CatalogResult<Vec<T>> {
        let path = self.data_dir.join(file);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse { path, source })
    }

    // ── Products ──────────────────────────────────────────────────────────────

    pub async fn fetch_all_products(&self) -> CatalogResult<Vec<Product>> {
        self.load(PRODUCTS_FILE).await
    }

    pub async fn fetch_product_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
        Ok(self
            .fetch_all_products()
            .await?
            .into_iter()
            .find(|p| p.id == id))
    }

    // ── Inventory ─────────────────────────────────────────────────────────────

    pub async fn fetch_all_inventory(&self) -> CatalogResult<Vec<InventoryRecord>> {
        self.load(INVENTORY_FILE).await
    }

    pub async fn fetch_inventory_for(&self, product_id: i64) -> CatalogResult<Option<InventoryRecord>> {
        Ok(self
            .fetch_all_inventory()
            .await?
            .into_iter()
            .find(|inv| inv.product_id == product_id))
    }

    // ── User profiles ─────────────────────────────────────────────────────────

    pub async fn fetch_all_users(&self) -> CatalogResult<Vec<UserProfile>> {
        self.load(USER_PROFILES_FILE).await
    }

    pub async fn fetch_user_by_id(&self, user_id: &str) -> CatalogResult<Option<UserProfile>> {
        Ok(self
            .fetch_all_users()
            .await?
            .into_iter()
            .find(|u| u.user_id == user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn lookups_read_seeded_files() {
        let dir = tempfile::tempdir().unwrap();
        seed::seed_missing(dir.path()).await.unwrap();
        let store = CatalogStore::new(dir.path());

        let products = store.fetch_all_products().await.unwrap();
        assert_eq!(products.len(), seed::demo_products().len());

        let first = store.fetch_product_by_id(1).await.unwrap().unwrap();
        assert_eq!(first, products[0]);
        assert!(store.fetch_product_by_id(9_999).await.unwrap().is_none());

        assert!(store.fetch_inventory_for(1).await.unwrap().is_some());
        assert!(store.fetch_user_by_id("user_001").await.unwrap().is_some());
        assert!(store.fetch_user_by_id("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn edits_are_visible_on_next_read() {
        let dir = tempfile::tempdir().unwrap();
        seed::seed_missing(dir.path()).await.unwrap();
        let store = CatalogStore::new(dir.path());
        assert!(store.fetch_product_by_id(500).await.unwrap().is_none());

        let mut products = store.fetch_all_products().await.unwrap();
        let mut extra = products[0].clone();
        extra.id = 500;
        products.push(extra);
        std::fs::write(
            dir.path().join(PRODUCTS_FILE),
            serde_json::to_vec(&products).unwrap(),
        )
        .unwrap();

        assert!(store.fetch_product_by_id(500).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        let err = store.fetch_all_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INVENTORY_FILE), b"{not json").unwrap();
        let store = CatalogStore::new(dir.path());
        let err = store.fetch_all_inventory().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
