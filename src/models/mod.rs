use serde::{Deserialize, Serialize};

pub mod product;
pub mod request;

pub use product::{normalize_category, FeatureSet, Product};
pub use request::{Preferences, RecommendationRequest, MAX_TOP_K, MIN_TOP_K};

/// A ranked product returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub score: f64,
    /// Must-have matches first, then nice-to-have matches
    pub matched_features: Vec<String>,
    pub explanation: String,
}

/// Response body of `POST /recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
}

/// Response body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
