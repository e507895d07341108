use std::path::PathBuf;

use crate::{error::AppResult, models::Product};

use super::CatalogSource;

/// Catalog read from a JSON array of products on disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> AppResult<Vec<Product>> {
        tracing::debug!(path = %self.path.display(), "Reading catalog file");
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    async fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, contents).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = write_temp(
            r#"[{"product_id": "t-1", "name": "Tab", "brand": "Acme", "category": "tablet", "price": 15000, "features": ["Stylus"]}]"#,
        )
        .await;

        let products = JsonFileCatalog::new(&path).load().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category, "tablet");
        assert!(products[0].features.contains("stylus"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileCatalog::new("/nonexistent/catalog.json");
        assert!(matches!(source.load().await, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_entry_is_parse_error() {
        let path = write_temp(r#"[{"product_id": "t-1", "name": "Tab"}]"#).await;

        let result = JsonFileCatalog::new(&path).load().await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
