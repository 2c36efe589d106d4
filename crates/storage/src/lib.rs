//! Static data store: the three immutable record sets the catalog is built from.
//!
//! Records come either from the fixtures compiled into the binary or from a
//! directory holding `users.json`, `categories.json` and `products.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use shared::domain::{Category, Product, User};
use tracing::info;

pub mod config;
pub mod error;

pub use config::{load_settings, Settings};
pub use error::StoreError;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const BUNDLED_USERS: &str = include_str!("../fixtures/users.json");
const BUNDLED_CATEGORIES: &str = include_str!("../fixtures/categories.json");
const BUNDLED_PRODUCTS: &str = include_str!("../fixtures/products.json");

#[derive(Debug, Clone, Default)]
pub struct Storage {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Storage {
    pub fn from_records(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// Loads the fixtures compiled into the binary.
    pub fn bundled() -> Result<Self, StoreError> {
        let storage = Self {
            users: parse_records(BUNDLED_USERS, "bundled users.json")?,
            categories: parse_records(BUNDLED_CATEGORIES, "bundled categories.json")?,
            products: parse_records(BUNDLED_PRODUCTS, "bundled products.json")?,
        };
        storage.log_loaded("bundled");
        Ok(storage)
    }

    pub fn from_dir(dir: &Path) -> Result<Self, StoreError> {
        let storage = Self {
            users: read_records(&dir.join(USERS_FILE))?,
            categories: read_records(&dir.join(CATEGORIES_FILE))?,
            products: read_records(&dir.join(PRODUCTS_FILE))?,
        };
        storage.log_loaded(&dir.display().to_string());
        Ok(storage)
    }

    /// Uses the configured fixture directory when present, the bundled data otherwise.
    pub fn open(settings: &Settings) -> Result<Self, StoreError> {
        match &settings.fixtures_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::bundled(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn log_loaded(&self, source: &str) {
        info!(
            source,
            users = self.users.len(),
            categories = self.categories.len(),
            products = self.products.len(),
            "loaded catalog fixtures"
        );
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    parse_records(&raw, &path.display().to_string())
}

fn parse_records<T: DeserializeOwned>(raw: &str, origin: &str) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Parse {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
