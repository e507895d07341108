use super::scoring::ScoredCandidate;

/// Orders candidates by score, highest first, and keeps the best `top_k`
///
/// The sort is stable: candidates with identical scores keep their input order.
pub fn rank(mut scored: Vec<ScoredCandidate<'_>>, top_k: usize) -> Vec<ScoredCandidate<'_>> {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::services::scoring::ScoreBreakdown;

    fn products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                product_id: format!("p-{}", i),
                name: format!("Product {}", i),
                brand: "Acme".to_string(),
                category: "phone".to_string(),
                price: 1000.0,
                features: Default::default(),
            })
            .collect()
    }

    fn scored<'a>(catalog: &'a [Product], scores: &[f64]) -> Vec<ScoredCandidate<'a>> {
        catalog
            .iter()
            .zip(scores)
            .map(|(product, &score)| ScoredCandidate {
                product,
                score,
                breakdown: ScoreBreakdown::default(),
                matched_features: Vec::new(),
            })
            .collect()
    }

    fn ids(ranked: &[ScoredCandidate<'_>]) -> Vec<String> {
        ranked.iter().map(|c| c.product.product_id.clone()).collect()
    }

    #[test]
    fn test_rank_sorts_descending() {
        let catalog = products(4);
        let ranked = rank(scored(&catalog, &[10.0, -5.0, 42.5, 20.0]), 10);

        assert_eq!(ids(&ranked), vec!["p-2", "p-3", "p-0", "p-1"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let catalog = products(5);
        let ranked = rank(scored(&catalog, &[30.0, 50.0, 30.0, 50.0, 30.0]), 10);

        assert_eq!(ids(&ranked), vec!["p-1", "p-3", "p-0", "p-2", "p-4"]);
    }

    #[test]
    fn test_rank_truncates_to_top_k() {
        let catalog = products(5);
        let ranked = rank(scored(&catalog, &[1.0, 2.0, 3.0, 4.0, 5.0]), 1);

        assert_eq!(ids(&ranked), vec!["p-4"]);
    }

    #[test]
    fn test_rank_top_k_larger_than_candidates() {
        let catalog = products(2);
        assert_eq!(rank(scored(&catalog, &[1.0, 2.0]), 10).len(), 2);
        assert!(rank(Vec::new(), 3).is_empty());
    }
}
