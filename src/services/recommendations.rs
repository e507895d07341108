use crate::models::{Product, Recommendation, RecommendationRequest, RecommendationResponse};

use super::{
    candidates::filter_by_category,
    ranking::rank,
    scoring::{score_product, ScoredCandidate},
};

const CURRENCY_SYMBOL: &str = "₹";

/// Generates ranked, explained product recommendations
///
/// Filters the catalog to the requested category, scores every candidate
/// independently, then keeps the `top_k` best. A category with no products is
/// not an error: the response carries an explanatory summary and no items.
///
/// Expects a request that already passed [`RecommendationRequest::validate`].
pub fn get_recommendations(
    request: &RecommendationRequest,
    catalog: &[Product],
) -> RecommendationResponse {
    let candidates = filter_by_category(catalog, &request.category);

    if candidates.is_empty() {
        tracing::info!(category = %request.category, "No candidates for category");
        return RecommendationResponse {
            summary: format!(
                "No products currently available for category '{}'.",
                request.category
            ),
            recommendations: vec![],
        };
    }

    let preferences = request.preferences();
    let scored: Vec<ScoredCandidate<'_>> = candidates
        .into_iter()
        .map(|product| score_product(&preferences, product))
        .collect();
    let candidate_count = scored.len();

    let ranked = rank(scored, request.top_k);

    for candidate in &ranked {
        tracing::debug!(
            product_id = %candidate.product.product_id,
            score = candidate.score,
            breakdown = ?candidate.breakdown,
            "Scored candidate"
        );
    }

    let recommendations: Vec<Recommendation> = ranked
        .into_iter()
        .map(|candidate| to_recommendation(candidate, request.budget))
        .collect();

    tracing::info!(
        category = %request.category,
        candidates = candidate_count,
        returned = recommendations.len(),
        top_score = recommendations.first().map(|r| r.score),
        "Recommendations generated"
    );

    RecommendationResponse {
        summary: summary(recommendations.len(), request),
        recommendations,
    }
}

fn to_recommendation(candidate: ScoredCandidate<'_>, budget: f64) -> Recommendation {
    let explanation = explain(&candidate, budget);
    let product = candidate.product;

    Recommendation {
        product_id: product.product_id.clone(),
        name: product.name.clone(),
        brand: product.brand.clone(),
        category: product.category.clone(),
        price: product.price,
        score: candidate.score,
        matched_features: candidate.matched_features,
        explanation,
    }
}

/// Human-readable reason a product was recommended
pub fn explain(candidate: &ScoredCandidate<'_>, budget: f64) -> String {
    let price_state = if candidate.within_budget(budget) {
        "within"
    } else {
        "slightly above"
    };
    let matches = if candidate.matched_features.is_empty() {
        "general fit".to_string()
    } else {
        candidate.matched_features.join(", ")
    };

    format!(
        "{} is {} your budget, scored {:?}, and matches key preferences: {}",
        candidate.product.name, price_state, candidate.score, matches
    )
}

fn summary(count: usize, request: &RecommendationRequest) -> String {
    format!(
        "Generated {} recommendations for '{}' within/near budget {}{:.0} using preference-aware ranking.",
        count, request.category, CURRENCY_SYMBOL, request.budget
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, brand: &str, price: f64, features: &[&str]) -> Product {
        Product {
            product_id: id.to_string(),
            name: format!("{} {}", brand, id),
            brand: brand.to_string(),
            category: category.to_string(),
            price,
            features: features.iter().copied().collect(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn test_catalog() -> Vec<Product> {
        vec![
            product("lap-1", "laptop", "Asus", 50_000.0, &["dedicated gpu", "lightweight"]),
            product("ph-1", "phone", "Samsung", 30_000.0, &["5G", "AMOLED Display"]),
            product("lap-2", "Laptop", "Lenovo", 72_000.0, &["Lightweight", "Long Battery"]),
            product("lap-3", "laptop", "HP", 41_000.0, &["Backlit Keyboard"]),
            product("ph-2", "phone", "Google", 52_000.0, &["Excellent Camera", "5G"]),
        ]
    }

    #[test]
    fn test_gaming_request_ranks_gpu_laptop_first() {
        let catalog = test_catalog();
        let mut request = RecommendationRequest::new(60_000.0, "laptop");
        request.use_case = Some("gaming".to_string());
        request.must_have_features = strings(&["dedicated gpu"]);

        let response = get_recommendations(&request, &catalog);

        assert_eq!(response.recommendations.len(), 3);
        let best = &response.recommendations[0];
        assert_eq!(best.product_id, "lap-1");
        assert_eq!(best.score, 58.67);
        assert_eq!(best.matched_features, strings(&["dedicated gpu"]));
        assert_eq!(
            best.explanation,
            "Asus lap-1 is within your budget, scored 58.67, and matches key preferences: dedicated gpu"
        );
        assert_eq!(
            response.summary,
            "Generated 3 recommendations for 'laptop' within/near budget ₹60000 using preference-aware ranking."
        );
    }

    #[test]
    fn test_whole_number_score_keeps_decimal_in_explanation() {
        let catalog = vec![product("ph-9", "phone", "Nokia", 10_000.0, &[])];
        let response = get_recommendations(&RecommendationRequest::new(10_000.0, "phone"), &catalog);

        assert_eq!(response.recommendations[0].score, 35.0);
        assert_eq!(
            response.recommendations[0].explanation,
            "Nokia ph-9 is within your budget, scored 35.0, and matches key preferences: general fit"
        );
    }

    #[test]
    fn test_unknown_category_returns_empty_summary() {
        let response = get_recommendations(&RecommendationRequest::new(20_000.0, "Tablet"), &test_catalog());

        assert!(response.recommendations.is_empty());
        assert_eq!(
            response.summary,
            "No products currently available for category 'Tablet'."
        );
    }

    #[test]
    fn test_missing_must_have_penalizes_every_candidate() {
        let catalog = test_catalog();
        let mut request = RecommendationRequest::new(100_000.0, "laptop");
        request.must_have_features = strings(&["oled display"]);

        let with_missing = get_recommendations(&request, &catalog);
        let baseline = get_recommendations(&RecommendationRequest::new(100_000.0, "laptop"), &catalog);

        assert_eq!(with_missing.recommendations.len(), baseline.recommendations.len());
        for (penalized, plain) in with_missing.recommendations.iter().zip(&baseline.recommendations) {
            assert_eq!(penalized.product_id, plain.product_id);
            assert!((penalized.score - (plain.score - 8.0)).abs() < 1e-9);
            assert!(!penalized.matched_features.iter().any(|f| f.to_lowercase() == "oled display"));
        }
    }

    #[test]
    fn test_top_k_one_returns_best_candidate() {
        let catalog: Vec<Product> = [10_000.0, 8_000.0, 2_000.0, 9_000.0, 6_000.0]
            .iter()
            .enumerate()
            .map(|(i, &price)| product(&format!("ph-{}", i), "phone", "Nokia", price, &[]))
            .collect();
        let mut request = RecommendationRequest::new(10_000.0, "phone");
        request.top_k = 1;

        let response = get_recommendations(&request, &catalog);

        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].product_id, "ph-2");
        assert_eq!(response.recommendations[0].score, 43.0);
    }

    #[test]
    fn test_result_bounded_by_top_k_and_candidates() {
        let catalog = test_catalog();
        for top_k in 1..=10 {
            let mut request = RecommendationRequest::new(45_000.0, "phone");
            request.top_k = top_k;
            let response = get_recommendations(&request, &catalog);
            assert_eq!(response.recommendations.len(), top_k.min(2));
            assert!(response
                .recommendations
                .windows(2)
                .all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_over_budget_explanation_and_general_fit() {
        let catalog = test_catalog();
        let response = get_recommendations(&RecommendationRequest::new(45_000.0, "phone"), &catalog);

        let pixel = response
            .recommendations
            .iter()
            .find(|r| r.product_id == "ph-2")
            .unwrap();
        // (52000 - 45000) / 45000 * 30
        assert_eq!(pixel.score, -4.67);
        assert_eq!(
            pixel.explanation,
            "Google ph-2 is slightly above your budget, scored -4.67, and matches key preferences: general fit"
        );
    }

    #[test]
    fn test_recommendation_keeps_catalog_casing() {
        let catalog = test_catalog();
        let mut request = RecommendationRequest::new(80_000.0, "LAPTOP");
        request.nice_to_have_features = strings(&["lightweight", "long battery"]);

        let response = get_recommendations(&request, &catalog);
        let lenovo = response
            .recommendations
            .iter()
            .find(|r| r.product_id == "lap-2")
            .unwrap();

        assert_eq!(lenovo.category, "Laptop");
        assert_eq!(lenovo.matched_features, strings(&["Lightweight", "Long Battery"]));
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let catalog = test_catalog();
        let mut request = RecommendationRequest::new(55_000.0, "laptop");
        request.preferred_brands = strings(&["hp", "asus"]);
        request.nice_to_have_features = strings(&["lightweight", "backlit keyboard"]);
        request.use_case = Some("student".to_string());

        let first = serde_json::to_string(&get_recommendations(&request, &catalog)).unwrap();
        let second = serde_json::to_string(&get_recommendations(&request, &catalog)).unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog, test_catalog());
    }
}
