use crate::api::Resource;
use crate::models::PageContent;

use super::DataStore;

/// Top-level page a path belongs to, for deciding what data must be loaded
/// before the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Products,
    Articles,
    Other,
}

impl Route {
    /// Classify a location pathname (no query string).
    pub fn classify(path: &str) -> Self {
        if !path.is_empty() && path.chars().all(|c| c == '/') {
            Self::Home
        } else if is_under(path, "/products") {
            Self::Products
        } else if is_under(path, "/articles") {
            Self::Articles
        } else {
            Self::Other
        }
    }

    /// Page content section the route's copy comes from.
    pub const fn required_section(self) -> Option<&'static str> {
        match self {
            Self::Home => Some(PageContent::MAIN),
            Self::Products => Some(PageContent::PRODUCTS),
            Self::Articles => Some(PageContent::ARTICLES),
            Self::Other => None,
        }
    }

    pub const fn required_resources(self) -> &'static [Resource] {
        match self {
            Self::Home => &[
                Resource::Pinpoints,
                Resource::Visions,
                Resource::Benefits,
                Resource::Products,
                Resource::Commodities,
                Resource::Clients,
                Resource::TeamMembers,
                Resource::Articles,
                Resource::Certifications,
                Resource::MyCompany,
                Resource::Socials,
            ],
            Self::Products => &[Resource::Catalog, Resource::MyCompany, Resource::Socials],
            Self::Articles => &[Resource::Blog, Resource::MyCompany, Resource::Socials],
            Self::Other => &[],
        }
    }

    /// What is still missing before this route can render.
    pub fn readiness(self, content: Option<&PageContent>, store: &DataStore) -> Readiness {
        let missing_section = self
            .required_section()
            .filter(|section| !content.is_some_and(|c| c.has_section(section)));
        let missing = self
            .required_resources()
            .iter()
            .copied()
            .filter(|r| !store.contains(*r))
            .collect();

        Readiness {
            missing_section,
            missing,
        }
    }
}

/// `path` is `prefix` itself or something below it (`prefix/...`).
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Result of a route readiness check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Readiness {
    pub missing_section: Option<&'static str>,
    pub missing: Vec<Resource>,
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        self.missing_section.is_none() && self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StoreEntry;
    use serde_json::json;

    fn store_with(resources: &[Resource]) -> DataStore {
        resources
            .iter()
            .map(|&resource| StoreEntry {
                resource,
                value: json!([]),
            })
            .collect()
    }

    fn content_with(sections: &[&str]) -> PageContent {
        let map = sections
            .iter()
            .map(|s| ((*s).to_string(), json!({})))
            .collect();
        PageContent::new(map)
    }

    #[test]
    fn test_classify() {
        assert_eq!(Route::classify("/"), Route::Home);
        assert_eq!(Route::classify("///"), Route::Home);
        assert_eq!(Route::classify("/products"), Route::Products);
        assert_eq!(Route::classify("/products/"), Route::Products);
        assert_eq!(Route::classify("/products/coffee"), Route::Products);
        assert_eq!(Route::classify("/productsx"), Route::Other);
        assert_eq!(Route::classify("/articles/2024/harvest"), Route::Articles);
        assert_eq!(Route::classify("/contact"), Route::Other);
        assert_eq!(Route::classify(""), Route::Other);
    }

    #[test]
    fn test_products_route_ready() {
        let store = store_with(&[Resource::Catalog, Resource::MyCompany, Resource::Socials]);
        let content = content_with(&["products"]);
        assert!(Route::Products.readiness(Some(&content), &store).is_ready());
    }

    #[test]
    fn test_products_route_waits_for_section() {
        let store = store_with(&[Resource::Catalog, Resource::MyCompany, Resource::Socials]);
        let readiness = Route::Products.readiness(None, &store);
        assert!(!readiness.is_ready());
        assert_eq!(readiness.missing_section, Some("products"));
        assert!(readiness.missing.is_empty());
    }

    #[test]
    fn test_articles_route_needs_blog_not_articles() {
        let content = content_with(&["articles"]);
        let store = store_with(&[Resource::Articles, Resource::MyCompany, Resource::Socials]);
        let readiness = Route::Articles.readiness(Some(&content), &store);
        assert_eq!(readiness.missing, vec![Resource::Blog]);
    }

    #[test]
    fn test_home_route_lists_all_missing() {
        let content = content_with(&["main"]);
        let store = store_with(&[Resource::Socials]);
        let readiness = Route::Home.readiness(Some(&content), &store);
        assert_eq!(readiness.missing.len(), 10);
        assert!(!readiness.missing.contains(&Resource::Socials));
        assert!(!readiness.missing.contains(&Resource::Catalog));
    }

    #[test]
    fn test_other_route_always_ready() {
        assert!(Route::Other.readiness(None, &DataStore::new()).is_ready());
    }
}
