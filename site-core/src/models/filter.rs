use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog filter dimension.
///
/// The wire name of the commodity key is `comodities`; it is kept as-is so
/// schemas and query strings round-trip with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterKey {
    #[serde(rename = "comodities")]
    Commodities,
    #[serde(rename = "regions")]
    Regions,
}

impl FilterKey {
    pub const ALL: [Self; 2] = [Self::Commodities, Self::Regions];

    /// Wire name of the key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commodities => "comodities",
            Self::Regions => "regions",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Heading shown above the key's dropdown.
    pub fn title(self) -> String {
        match self {
            Self::Commodities => "Commodities".to_string(),
            Self::Regions => capitalize(self.as_str()),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// One candidate value of a filter key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOption {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Filter keys and their candidate values, read from the products page
/// content (`products.catalog.filters`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<FilterOption>>",
    into = "BTreeMap<String, Vec<FilterOption>>"
)]
pub struct FilterSchema {
    options: BTreeMap<FilterKey, Vec<FilterOption>>,
}

impl FilterSchema {
    pub fn new(options: impl IntoIterator<Item = (FilterKey, Vec<FilterOption>)>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = FilterKey> + '_ {
        self.options.keys().copied()
    }

    pub fn has_key(&self, key: FilterKey) -> bool {
        self.options.contains_key(&key)
    }

    pub fn options(&self, key: FilterKey) -> &[FilterOption] {
        self.options.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Candidate names of `key`, in schema order.
    pub fn names(&self, key: FilterKey) -> Vec<&str> {
        self.options(key).iter().map(|o| o.name.as_str()).collect()
    }

    pub fn contains(&self, key: FilterKey, name: &str) -> bool {
        self.options(key).iter().any(|o| o.name == name)
    }

    pub fn find_by_slug<'a>(
        &'a self,
        key: FilterKey,
        slug: &'a str,
    ) -> impl Iterator<Item = &'a FilterOption> + 'a {
        self.options(key)
            .iter()
            .filter(move |o| o.slug.as_deref() == Some(slug))
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<BTreeMap<String, Vec<FilterOption>>> for FilterSchema {
    fn from(raw: BTreeMap<String, Vec<FilterOption>>) -> Self {
        let mut options = BTreeMap::new();
        for (name, values) in raw {
            match FilterKey::parse(&name) {
                Some(key) => {
                    options.insert(key, values);
                }
                None => tracing::debug!(filter = %name, "ignoring unknown catalog filter"),
            }
        }
        Self { options }
    }
}

impl From<FilterSchema> for BTreeMap<String, Vec<FilterOption>> {
    fn from(schema: FilterSchema) -> Self {
        schema
            .options
            .into_iter()
            .map(|(key, values)| (key.as_str().to_string(), values))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_key_titles() {
        assert_eq!(FilterKey::Commodities.title(), "Commodities");
        assert_eq!(FilterKey::Regions.title(), "Regions");
    }

    #[test]
    fn test_filter_key_parse() {
        assert_eq!(FilterKey::parse("comodities"), Some(FilterKey::Commodities));
        assert_eq!(FilterKey::parse("regions"), Some(FilterKey::Regions));
        assert_eq!(FilterKey::parse("commodities"), None);
    }

    #[test]
    fn test_schema_ignores_unknown_keys() {
        let schema: FilterSchema = serde_json::from_value(serde_json::json!({
            "comodities": [{ "id": 1, "name": "Coffee", "slug": "coffee" }],
            "certifications": [{ "id": 3, "name": "Organic" }],
            "regions": [{ "id": 9, "name": "Aceh" }]
        }))
        .unwrap();

        let keys: Vec<_> = schema.keys().collect();
        assert_eq!(keys, vec![FilterKey::Commodities, FilterKey::Regions]);
        assert!(schema.contains(FilterKey::Regions, "Aceh"));
        assert!(!schema.contains(FilterKey::Regions, "Coffee"));
    }

    #[test]
    fn test_find_by_slug() {
        let schema = FilterSchema::new([(
            FilterKey::Commodities,
            vec![
                FilterOption { id: 1, name: "Coffee".into(), slug: Some("coffee".into()) },
                FilterOption { id: 2, name: "Cocoa".into(), slug: Some("cocoa".into()) },
            ],
        )]);
        let found: Vec<_> = schema
            .find_by_slug(FilterKey::Commodities, "cocoa")
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(found, vec!["Cocoa"]);
        assert_eq!(schema.find_by_slug(FilterKey::Regions, "cocoa").count(), 0);
    }

    #[test]
    fn test_schema_serializes_with_wire_keys() {
        let schema = FilterSchema::new([(FilterKey::Commodities, Vec::new())]);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json, serde_json::json!({ "comodities": [] }));
    }

    #[test]
    fn test_missing_key_has_no_options() {
        let schema = FilterSchema::default();
        assert!(schema.is_empty());
        assert!(schema.options(FilterKey::Regions).is_empty());
        assert!(schema.names(FilterKey::Regions).is_empty());
    }
}
