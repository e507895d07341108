use crate::models::{FeatureSet, Preferences, Product};

/// Flat reward for any product priced at or below the budget
pub const WITHIN_BUDGET_BONUS: f64 = 35.0;
/// Points per unit of unused budget ratio
pub const HEADROOM_SCALE: f64 = 10.0;
pub const MAX_HEADROOM_BONUS: f64 = 10.0;
/// Points lost per unit of overage ratio
pub const OVERAGE_SCALE: f64 = 30.0;
pub const MAX_OVERAGE_PENALTY: f64 = 25.0;
pub const PREFERRED_BRAND_BONUS: f64 = 15.0;
pub const MUST_HAVE_MATCH_POINTS: f64 = 12.0;
pub const MUST_HAVE_MISS_PENALTY: f64 = 8.0;
pub const NICE_TO_HAVE_MATCH_POINTS: f64 = 5.0;

/// Bonus for products whose features suit a requested use case
struct UseCaseRule {
    use_cases: &'static [&'static str],
    /// Any one of these (normalized) features triggers the bonus
    features: &'static [&'static str],
    bonus: f64,
}

const USE_CASE_RULES: [UseCaseRule; 4] = [
    UseCaseRule {
        use_cases: &["gaming", "design", "video editing"],
        features: &["dedicated gpu"],
        bonus: 10.0,
    },
    UseCaseRule {
        use_cases: &["travel", "student"],
        features: &["lightweight"],
        bonus: 8.0,
    },
    UseCaseRule {
        use_cases: &["photography", "content creation"],
        features: &["excellent camera", "telephoto camera"],
        bonus: 10.0,
    },
    UseCaseRule {
        use_cases: &["long battery", "business"],
        features: &["long battery", "5000mah battery"],
        bonus: 8.0,
    },
];

/// Signed contribution of each scoring term
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Within-budget bonus plus headroom, or the (negative) overage penalty
    pub budget_fit: f64,
    pub brand_affinity: f64,
    pub must_have_matches: f64,
    /// Zero or negative
    pub must_have_misses: f64,
    pub nice_to_have_matches: f64,
    pub use_case_bonus: f64,
}

impl ScoreBreakdown {
    /// Sum of all terms rounded to two decimal places
    pub fn total(&self) -> f64 {
        round_score(
            self.budget_fit
                + self.brand_affinity
                + self.must_have_matches
                + self.must_have_misses
                + self.nice_to_have_matches
                + self.use_case_bonus,
        )
    }
}

/// A candidate product with its computed fitness
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub product: &'a Product,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Original-case labels, must-have matches first
    pub matched_features: Vec<String>,
}

impl ScoredCandidate<'_> {
    pub fn within_budget(&self, budget: f64) -> bool {
        self.product.price <= budget
    }
}

/// Rounds to two decimals using the exact decimal expansion of `score`
pub fn round_score(score: f64) -> f64 {
    format!("{:.2}", score).parse().unwrap_or(score)
}

/// Budget term: rewards headroom under the budget, penalizes overage
pub fn budget_fit(price: f64, budget: f64) -> f64 {
    if price <= budget {
        let headroom = (budget - price) / budget.max(1.0);
        WITHIN_BUDGET_BONUS + (headroom * HEADROOM_SCALE).min(MAX_HEADROOM_BONUS)
    } else {
        let overage = (price - budget) / budget;
        -(overage * OVERAGE_SCALE).min(MAX_OVERAGE_PENALTY)
    }
}

fn use_case_bonus(use_case: &str, features: &FeatureSet) -> f64 {
    USE_CASE_RULES
        .iter()
        .filter(|rule| rule.use_cases.contains(&use_case))
        .filter(|rule| rule.features.iter().any(|feature| features.contains(feature)))
        .map(|rule| rule.bonus)
        .sum()
}

/// Scores one product against normalized preferences
///
/// Pure function of its inputs, so candidates can be scored in any order.
pub fn score_product<'a>(preferences: &Preferences, product: &'a Product) -> ScoredCandidate<'a> {
    let features = &product.features;

    let brand_affinity = if preferences.brands.contains(&product.brand.to_lowercase()) {
        PREFERRED_BRAND_BONUS
    } else {
        0.0
    };

    let (must_matched, must_missing): (Vec<&String>, Vec<&String>) = preferences
        .must_have
        .iter()
        .partition(|feature| features.contains(feature));
    let nice_matched: Vec<&String> = preferences
        .nice_to_have
        .iter()
        .filter(|feature| features.contains(feature))
        .collect();

    let breakdown = ScoreBreakdown {
        budget_fit: budget_fit(product.price, preferences.budget),
        brand_affinity,
        must_have_matches: must_matched.len() as f64 * MUST_HAVE_MATCH_POINTS,
        must_have_misses: -(must_missing.len() as f64 * MUST_HAVE_MISS_PENALTY),
        nice_to_have_matches: nice_matched.len() as f64 * NICE_TO_HAVE_MATCH_POINTS,
        use_case_bonus: use_case_bonus(&preferences.use_case, features),
    };

    // Preference sets are sorted, so both groups come out alphabetical
    let matched_features = must_matched
        .into_iter()
        .chain(nice_matched)
        .filter_map(|key| features.label(key))
        .map(str::to_string)
        .collect();

    ScoredCandidate {
        product,
        score: breakdown.total(),
        breakdown,
        matched_features,
    }
}
