use crate::models::Product;

/// Case-insensitive substring match against the product name, description,
/// commodity names and region names. An empty keyword matches everything.
pub fn matches_keyword(product: &Product, keyword: &str) -> bool {
    matches_lowercase(product, &keyword.to_lowercase())
}

/// Same as [`matches_keyword`] with the needle already lowercased.
pub(crate) fn matches_lowercase(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(needle);

    hit(&product.name)
        || hit(&product.description)
        || product.commodities.iter().any(|commodity| {
            hit(&commodity.name) || commodity.regions.iter().any(|region| hit(&region.name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Commodity, Region};

    fn product() -> Product {
        Product {
            id: 3,
            name: "Gayo Arabica".to_string(),
            description: "Single origin, wet hulled".to_string(),
            image: None,
            commodities: vec![Commodity {
                id: 1,
                name: "Coffee".to_string(),
                slug: Some("coffee".to_string()),
                regions: vec![Region {
                    id: 5,
                    name: "Central Aceh".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_empty_keyword_matches() {
        assert!(matches_keyword(&product(), ""));
    }

    #[test]
    fn test_matches_each_field() {
        let product = product();
        assert!(matches_keyword(&product, "gayo"));
        assert!(matches_keyword(&product, "WET HULLED"));
        assert!(matches_keyword(&product, "coff"));
        assert!(matches_keyword(&product, "aceh"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_keyword(&product(), "cocoa"));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert!(!matches_keyword(&product(), " arabica "));
        assert!(matches_keyword(&product(), " arabica"));
    }
}
