use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Map, Number};
use tracing::info;

use crate::catalog::{CatalogError, CatalogResult, INVENTORY_FILE, PRODUCTS_FILE, USER_PROFILES_FILE};
use crate::models::{InventoryRecord, Preferences, Product, UserProfile};

/// (name, category, color, price, sizes)
static PRODUCTS: &[(&str, &str, &str, u64, &[&str])] = &[
    ("Classic White Oxford Shirt", "Shirts", "White", 1799, &["S", "M", "L", "XL"]),
    ("Slim Fit Checked Shirt", "Shirts", "Blue", 1599, &["S", "M", "L"]),
    ("Linen Casual Shirt", "Shirts", "Beige", 2199, &["M", "L", "XL"]),
    ("Graphic Crew Neck T-Shirt", "T-Shirts", "Black", 799, &["S", "M", "L", "XL"]),
    ("Polo T-Shirt", "T-Shirts", "Navy", 999, &["M", "L", "XL"]),
    ("Slim Tapered Jeans", "Jeans", "Indigo", 2499, &["30", "32", "34", "36"]),
    ("Relaxed Fit Jeans", "Jeans", "Light Blue", 2299, &["30", "32", "34"]),
    ("Single Breasted Blazer", "Blazers", "Charcoal", 5999, &["38", "40", "42"]),
    ("Textured Party Blazer", "Blazers", "Maroon", 6499, &["38", "40", "42", "44"]),
    ("Festive Silk Kurta", "Kurtas", "Mustard", 2799, &["S", "M", "L", "XL"]),
    ("Cotton Printed Kurta", "Kurtas", "Green", 1499, &["S", "M", "L"]),
    ("Floral Midi Dress", "Dresses", "Pink", 2999, &["XS", "S", "M", "L"]),
];

static STORES: &[&str] = &["Mumbai - Phoenix Mall", "Delhi - Select Citywalk", "Bengaluru - Orion Mall"];

/// (user_id, name, loyalty_points, preferred categories)
static USERS: &[(&str, &str, u64, &[&str])] = &[
    ("user_001", "Rahul Sharma", 1250, &["Shirts", "Blazers"]),
    ("user_002", "Priya Nair", 340, &["Kurtas", "Dresses"]),
    ("user_003", "Arjun Mehta", 0, &["Jeans", "T-Shirts"]),
];

pub fn demo_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, (name, category, color, price, sizes))| {
            let id = i as i64 + 1;
            let mut extra = Map::new();
            extra.insert("sizes".to_string(), json!(sizes));
            extra.insert(
                "description".to_string(),
                json!(format!("{} in {}.", name, color.to_lowercase())),
            );
            Product {
                id,
                name: name.to_string(),
                category: category.to_string(),
                color: color.to_string(),
                price: Number::from(*price),
                image: format!("https://images.setu.example/products/{}.jpg", id),
                extra,
            }
        })
        .collect()
}

/// Stock for every demo product except the last, which is left without a
/// record so the inventory-missing path is reachable.
pub fn demo_inventory() -> Vec<InventoryRecord> {
    let count = PRODUCTS.len() as i64 - 1;
    (1..=count)
        .map(|id| {
            let store_stock: IndexMap<String, u32> = STORES
                .iter()
                .enumerate()
                .map(|(s, store)| (store.to_string(), ((id as u32 * 7 + s as u32 * 3) % 11)))
                .collect();
            InventoryRecord {
                product_id: id,
                // Product 4 is online-sold-out but still stocked in stores.
                online_stock: if id == 4 { 0 } else { (id as u32 * 13) % 50 + 5 },
                store_stock,
            }
        })
        .collect()
}

pub fn demo_users() -> Vec<UserProfile> {
    USERS
        .iter()
        .map(|(user_id, name, points, categories)| UserProfile {
            user_id: user_id.to_string(),
            name: Some(name.to_string()),
            loyalty_points: *points,
            preferences: Preferences {
                categories: categories.iter().map(|c| c.to_string()).collect(),
                extra: Default::default(),
            },
            extra: Default::default(),
        })
        .collect()
}

async fn write_if_missing<T: Serialize>(dir: &Path, file: &str, records: &[T]) -> CatalogResult<bool> {
    let path = dir.join(file);
    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        return Ok(false);
    }
    let body = serde_json::to_vec_pretty(records).map_err(|source| CatalogError::Parse {
        path: path.clone(),
        source,
    })?;
    tokio::fs::write(&path, body)
        .await
        .map_err(|source| CatalogError::Io { path, source })?;
    Ok(true)
}

/// Write the demo catalog into `dir`, one file at a time, skipping any file
/// that already exists. Returns the names of the files created.
pub async fn seed_missing(dir: &Path) -> CatalogResult<Vec<&'static str>> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut written = Vec::new();
    if write_if_missing(dir, PRODUCTS_FILE, &demo_products()).await? {
        written.push(PRODUCTS_FILE);
    }
    if write_if_missing(dir, INVENTORY_FILE, &demo_inventory()).await? {
        written.push(INVENTORY_FILE);
    }
    if write_if_missing(dir, USER_PROFILES_FILE, &demo_users()).await? {
        written.push(USER_PROFILES_FILE);
    }

    for file in &written {
        info!(dir = %dir.display(), file, "Seeded demo catalog file");
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_ids_are_unique_and_sequential() {
        let ids: Vec<i64> = demo_products().iter().map(|p| p.id).collect();
        let expected: Vec<i64> = (1..=PRODUCTS.len() as i64).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn last_product_has_no_inventory() {
        let last = demo_products().last().unwrap().id;
        assert!(demo_inventory().iter().all(|inv| inv.product_id != last));
    }

    #[tokio::test]
    async fn existing_files_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), b"[]").unwrap();

        let written = seed_missing(dir.path()).await.unwrap();
        assert_eq!(written, vec![INVENTORY_FILE, USER_PROFILES_FILE]);
        let kept = std::fs::read_to_string(dir.path().join(PRODUCTS_FILE)).unwrap();
        assert_eq!(kept, "[]");

        assert!(seed_missing(dir.path()).await.unwrap().is_empty());
    }
}
