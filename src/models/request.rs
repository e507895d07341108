use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};

use crate::error::{AppError, AppResult};

/// Smallest number of recommendations a caller may ask for
pub const MIN_TOP_K: usize = 1;
/// Largest number of recommendations a caller may ask for
pub const MAX_TOP_K: usize = 10;

/// Buyer constraints submitted to `POST /recommendations`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationRequest {
    /// Maximum budget in currency units
    pub budget: f64,
    /// Product category (e.g., "laptop", "phone")
    pub category: String,
    #[serde(default)]
    pub preferred_brands: Vec<String>,
    #[serde(default)]
    pub must_have_features: Vec<String>,
    #[serde(default)]
    pub nice_to_have_features: Vec<String>,
    /// Primary use case; an explicit `null` means no use case
    #[serde(default = "default_use_case")]
    pub use_case: Option<String>,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_use_case() -> Option<String> {
    Some("general".to_string())
}

fn default_top_k() -> usize {
    5
}

/// Request constraints after trimming and case folding
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub budget: f64,
    pub brands: HashSet<String>,
    /// Sorted so matches come out in a stable order
    pub must_have: BTreeSet<String>,
    pub nice_to_have: BTreeSet<String>,
    pub use_case: String,
}

/// Trims and lowercases labels, dropping blank ones
pub fn normalize_labels<'a, I, C>(labels: I) -> C
where
    I: IntoIterator<Item = &'a String>,
    C: FromIterator<String>,
{
    labels
        .into_iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .map(str::to_lowercase)
        .collect()
}

impl RecommendationRequest {
    /// Creates a request with default preferences
    pub fn new(budget: f64, category: impl Into<String>) -> Self {
        Self {
            budget,
            category: category.into(),
            preferred_brands: Vec::new(),
            must_have_features: Vec::new(),
            nice_to_have_features: Vec::new(),
            use_case: default_use_case(),
            top_k: default_top_k(),
        }
    }

    /// Rejects requests the engine cannot score
    pub fn validate(&self) -> AppResult<()> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "budget must be greater than 0, got {}",
                self.budget
            )));
        }

        if !(MIN_TOP_K..=MAX_TOP_K).contains(&self.top_k) {
            return Err(AppError::InvalidInput(format!(
                "top_k must be between {} and {}, got {}",
                MIN_TOP_K, MAX_TOP_K, self.top_k
            )));
        }

        Ok(())
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            budget: self.budget,
            brands: normalize_labels(&self.preferred_brands),
            must_have: normalize_labels(&self.must_have_features),
            nice_to_have: normalize_labels(&self.nice_to_have_features),
            use_case: self
                .use_case
                .as_deref()
                .map(|use_case| use_case.trim().to_lowercase())
                .unwrap_or_default(),
        }
    }
}
