use crate::models::{normalize_category, Product};

/// Selects the catalog entries belonging to the requested category
///
/// Matching trims whitespace and ignores case. Catalog order is preserved so
/// ranking ties keep their original relative order.
pub fn filter_by_category<'a>(catalog: &'a [Product], category: &str) -> Vec<&'a Product> {
    let category = normalize_category(category);
    catalog
        .iter()
        .filter(|product| product.in_category(&category))
        .collect()
}
