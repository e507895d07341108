//! Product catalog sources
//!
//! The catalog is loaded once at process start from a pluggable [`CatalogSource`]
//! (the builtin table, a JSON file, or a test fixture) and then shared read-only
//! between requests.

use std::collections::{BTreeSet, HashSet};

use crate::{
    error::{AppError, AppResult},
    models::{normalize_category, Product},
};

pub mod builtin;
pub mod json_file;

pub use builtin::BuiltinCatalog;
pub use json_file::JsonFileCatalog;

/// Trait for product catalog sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads every product record, in catalog order
    async fn load(&self) -> AppResult<Vec<Product>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Validated, immutable product list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid records and duplicate product IDs
    pub fn new(products: Vec<Product>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.product_id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "duplicate product_id '{}'",
                    product.product_id
                )));
            }
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories, lowercased
    pub fn categories(&self) -> BTreeSet<String> {
        self.products
            .iter()
            .map(|product| normalize_category(&product.category))
            .collect()
    }
}

/// Loads and validates the catalog from a source
pub async fn load_catalog(source: &dyn CatalogSource) -> AppResult<Catalog> {
    let products = source.load().await.map_err(|e| {
        tracing::error!(source = source.name(), error = %e, "Catalog load failed");
        e
    })?;

    let catalog = Catalog::new(products)?;

    tracing::info!(
        source = source.name(),
        products = catalog.len(),
        categories = ?catalog.categories(),
        "Catalog loaded"
    );

    Ok(catalog)
}
