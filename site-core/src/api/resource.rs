use std::fmt;

/// Request path and access key of the page copy endpoint.
pub const PAGE_CONTENTS_PATH: &str = "page_contents";

/// A backend collection fetched once at startup.
///
/// Each resource has three names: the request path, the key its payload sits
/// under in the response `data` object, and the key it is stored under.
/// Most resources use one name for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    Pinpoints,
    Visions,
    Benefits,
    Products,
    Commodities,
    TeamMembers,
    Clients,
    Articles,
    Certifications,
    MyCompany,
    Catalog,
    Blog,
    Socials,
}

impl Resource {
    /// Every resource, in request order.
    pub const ALL: [Self; 13] = [
        Self::Pinpoints,
        Self::Visions,
        Self::Benefits,
        Self::Products,
        Self::Commodities,
        Self::TeamMembers,
        Self::Clients,
        Self::Articles,
        Self::Certifications,
        Self::MyCompany,
        Self::Catalog,
        Self::Blog,
        Self::Socials,
    ];

    /// Path appended to the API base.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Pinpoints => "pinpoints",
            Self::Visions => "visions",
            Self::Benefits => "benefits",
            Self::Products => "products",
            Self::Commodities => "comodities",
            Self::TeamMembers => "team_members",
            Self::Clients => "clients",
            Self::Articles => "articles",
            Self::Certifications => "certifications",
            Self::MyCompany => "my_company",
            Self::Catalog => "catalog",
            Self::Blog => "articles?get=all",
            Self::Socials => "socials",
        }
    }

    /// Field of the response `data` object holding the payload.
    pub const fn access_key(self) -> &'static str {
        match self {
            Self::Articles | Self::Blog => "posts",
            Self::MyCompany => "company",
            Self::Catalog => "products",
            _ => self.path(),
        }
    }

    /// Key the payload is stored under in the data store.
    pub const fn store_key(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            _ => self.path(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_remapped_access_keys() {
        assert_eq!(Resource::Articles.access_key(), "posts");
        assert_eq!(Resource::Blog.access_key(), "posts");
        assert_eq!(Resource::MyCompany.access_key(), "company");
        assert_eq!(Resource::Catalog.access_key(), "products");
        assert_eq!(Resource::Commodities.access_key(), "comodities");
    }

    #[test]
    fn test_store_keys_follow_request_names() {
        assert_eq!(Resource::Blog.path(), "articles?get=all");
        assert_eq!(Resource::Blog.store_key(), "blog");
        assert_eq!(Resource::Articles.store_key(), "articles");
        assert_eq!(Resource::MyCompany.store_key(), "my_company");
        assert_eq!(Resource::Catalog.store_key(), "catalog");
    }

    #[test]
    fn test_store_keys_are_unique() {
        let keys: HashSet<_> = Resource::ALL.iter().map(|r| r.store_key()).collect();
        assert_eq!(keys.len(), Resource::ALL.len());
    }
}
