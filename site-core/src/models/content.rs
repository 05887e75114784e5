use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::FilterSchema;

/// Page copy from the `page_contents` endpoint, one raw JSON object per
/// page section (`main`, `products`, `articles`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageContent {
    sections: Map<String, Value>,
}

impl PageContent {
    pub const MAIN: &'static str = "main";
    pub const PRODUCTS: &'static str = "products";
    pub const ARTICLES: &'static str = "articles";

    pub fn new(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    /// A section, unless it is absent or `null`.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name).filter(|v| !v.is_null())
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// String field of a section, e.g. `text("main", "hero_title")`.
    pub fn text(&self, section: &str, field: &str) -> Option<&str> {
        self.section(section)?.get(field)?.as_str()
    }

    /// Catalog filter schema from `products.catalog.filters`.
    pub fn catalog_filters(&self) -> Option<FilterSchema> {
        let filters = self
            .section(Self::PRODUCTS)?
            .get("catalog")?
            .get("filters")?;
        match FilterSchema::deserialize(filters) {
            Ok(schema) => Some(schema),
            Err(e) => {
                tracing::warn!("Failed to decode catalog filters: {e}");
                None
            }
        }
    }
}

/// Presentational view of an arbitrary backend record (team member, client,
/// post, certification, ...). Each field takes the first matching wire field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentItem {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

impl ContentItem {
    const TITLE_FIELDS: &'static [&'static str] = &["title", "name"];
    const BODY_FIELDS: &'static [&'static str] = &["description", "excerpt", "content", "position"];
    const IMAGE_FIELDS: &'static [&'static str] = &["public_image", "image", "thumbnail", "logo"];
    const LINK_FIELDS: &'static [&'static str] = &["url", "link", "slug"];

    pub fn from_value(value: &Value) -> Self {
        Self {
            title: first_text(value, Self::TITLE_FIELDS),
            body: first_text(value, Self::BODY_FIELDS),
            image: first_text(value, Self::IMAGE_FIELDS),
            link: first_text(value, Self::LINK_FIELDS),
        }
    }

    /// Items of a store entry: every element of an array, or the value itself
    /// when the entry is a single object.
    pub fn list(value: &Value) -> Vec<Self> {
        match value {
            Value::Array(values) => values.iter().map(Self::from_value).collect(),
            Value::Object(_) => vec![Self::from_value(value)],
            _ => Vec::new(),
        }
    }
}

fn first_text(value: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| value.get(*field)?.as_str())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterKey;
    use serde_json::json;

    fn content() -> PageContent {
        serde_json::from_value(json!({
            "main": { "hero_title": "Indonesian commodities, direct" },
            "products": {
                "catalog": {
                    "filters": {
                        "comodities": [{ "id": 1, "name": "Coffee", "slug": "coffee" }],
                        "regions": []
                    }
                }
            },
            "articles": null
        }))
        .unwrap()
    }

    #[test]
    fn test_null_section_counts_as_absent() {
        let content = content();
        assert!(content.has_section("main"));
        assert!(content.has_section("products"));
        assert!(!content.has_section("articles"));
        assert!(!content.has_section("about"));
    }

    #[test]
    fn test_text_lookup() {
        let content = content();
        assert_eq!(
            content.text("main", "hero_title"),
            Some("Indonesian commodities, direct")
        );
        assert_eq!(content.text("main", "missing"), None);
        assert_eq!(content.text("articles", "title"), None);
    }

    #[test]
    fn test_catalog_filters() {
        let schema = content().catalog_filters().unwrap();
        assert_eq!(schema.names(FilterKey::Commodities), vec!["Coffee"]);
        assert!(schema.has_key(FilterKey::Regions));
        assert!(PageContent::default().catalog_filters().is_none());
    }

    #[test]
    fn test_content_item_picks_first_present_field() {
        let item = ContentItem::from_value(&json!({
            "name": "Rina",
            "position": "Head of Sourcing",
            "image": "",
            "thumbnail": "https://cdn.example.com/rina.jpg"
        }));
        assert_eq!(item.title.as_deref(), Some("Rina"));
        assert_eq!(item.body.as_deref(), Some("Head of Sourcing"));
        assert_eq!(item.image.as_deref(), Some("https://cdn.example.com/rina.jpg"));
        assert!(item.link.is_none());
    }

    #[test]
    fn test_content_item_list_shapes() {
        assert_eq!(ContentItem::list(&json!([{ "title": "a" }, { "title": "b" }])).len(), 2);
        assert_eq!(ContentItem::list(&json!({ "name": "Company" })).len(), 1);
        assert!(ContentItem::list(&json!("text")).is_empty());
    }
}
