use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};

/// Feature labels of a product, keyed by their lowercase form
///
/// Matching is case-insensitive while the original label is kept for display.
/// Serialized as a plain list of labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSet {
    labels: BTreeMap<String, String>,
}

impl FeatureSet {
    /// Normalized lookup key for a feature label
    pub fn key(label: &str) -> String {
        label.to_lowercase()
    }

    /// Returns true if the normalized feature key is present
    pub fn contains(&self, key: &str) -> bool {
        self.labels.contains_key(key)
    }

    /// Original label for a normalized key
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut labels = BTreeMap::new();
        for label in iter {
            let label = label.into();
            // Later labels win on a case-insensitive collision
            labels.insert(Self::key(&label), label);
        }
        Self { labels }
    }
}

impl From<Vec<String>> for FeatureSet {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<FeatureSet> for Vec<String> {
    fn from(features: FeatureSet) -> Self {
        features.labels.into_values().collect()
    }
}

/// Form in which categories are compared: trimmed and lowercased
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub features: FeatureSet,
}

impl Product {
    /// Returns true if the product belongs to the (already normalized) category
    pub fn in_category(&self, normalized_category: &str) -> bool {
        normalize_category(&self.category) == normalized_category
    }

    /// Checks the record is usable for scoring
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("product_id", &self.product_id),
            ("name", &self.name),
            ("brand", &self.brand),
            ("category", &self.category),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "product '{}' has an empty {}",
                    self.product_id, field
                )));
            }
        }

        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(AppError::Catalog(format!(
                "product '{}' has invalid price {}",
                self.product_id, self.price
            )));
        }

        Ok(())
    }
}
