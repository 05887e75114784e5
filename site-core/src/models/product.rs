use serde::{Deserialize, Deserializer, Serialize};

/// A region a commodity is sourced from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    pub id: u64,
    pub name: String,
}

/// A commodity (coffee, cocoa, ...) together with the regions it comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commodity {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// A catalog product as served by the `catalog` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Public URL of the card background image
    #[serde(default, rename = "public_image")]
    pub image: Option<String>,
    #[serde(default, rename = "comodities")]
    pub commodities: Vec<Commodity>,
}

impl Product {
    /// Commodity names in the order the backend listed them.
    pub fn commodity_names(&self) -> impl Iterator<Item = &str> {
        self.commodities.iter().map(|c| c.name.as_str())
    }

    /// Every region name reachable through the product's commodities,
    /// deduplicated by name and kept in first-seen order.
    pub fn region_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for region in self.commodities.iter().flat_map(|c| &c.regions) {
            if !names.contains(&region.name.as_str()) {
                names.push(&region.name);
            }
        }
        names
    }

    /// Region names without deduplication; used for matching only.
    pub fn all_region_names(&self) -> impl Iterator<Item = &str> {
        self.commodities
            .iter()
            .flat_map(|c| c.regions.iter().map(|r| r.name.as_str()))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Arabica Beans",
            "description": "Washed, medium roast",
            "public_image": "https://cdn.example.com/arabica.jpg",
            "comodities": [
                {
                    "id": 1,
                    "name": "Coffee",
                    "slug": "coffee",
                    "regions": [{ "id": 10, "name": "Aceh" }, { "id": 11, "name": "Toraja" }]
                },
                {
                    "id": 2,
                    "name": "Spices",
                    "regions": [{ "id": 11, "name": "Toraja" }, { "id": 12, "name": "Bali" }]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_product_deserializes_wire_names() {
        let product = sample();
        assert_eq!(product.id, 7);
        assert_eq!(product.image.as_deref(), Some("https://cdn.example.com/arabica.jpg"));
        assert_eq!(product.commodities.len(), 2);
        assert_eq!(product.commodities[0].slug.as_deref(), Some("coffee"));
        assert!(product.commodities[1].slug.is_none());
    }

    #[test]
    fn test_region_names_are_deduplicated_in_order() {
        let product = sample();
        assert_eq!(product.region_names(), vec!["Aceh", "Toraja", "Bali"]);
        assert_eq!(product.all_region_names().count(), 4);
    }

    #[test]
    fn test_commodity_names_keep_order() {
        let product = sample();
        let names: Vec<_> = product.commodity_names().collect();
        assert_eq!(names, vec!["Coffee", "Spices"]);
    }

    #[test]
    fn test_null_description_becomes_empty() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Plain",
            "description": null
        }))
        .unwrap();
        assert_eq!(product.description, "");
        assert!(product.commodities.is_empty());
        assert!(product.image.is_none());
    }

    #[test]
    fn test_product_serializes_back_to_wire_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"comodities\""));
        assert!(json.contains("\"public_image\""));
    }
}
