use crate::{error::AppResult, models::Product};

use super::CatalogSource;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Static laptop and phone table compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

#[async_trait::async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load(&self) -> AppResult<Vec<Product>> {
        Ok(serde_json::from_str(BUILTIN_CATALOG_JSON)?)
    }

    fn name(&self) -> &'static str {
        "builtin"
    }
}
