/// Base URL used when `SHOWROOM_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Window widths (CSS pixels) at which the layout changes.
pub const MOBILE_BREAKPOINT: u32 = 768;
pub const DESKTOP_BREAKPOINT: u32 = 1024;

/// Site-wide settings, fixed for the lifetime of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    api_base_url: String,
}

impl SiteConfig {
    /// Build a config for the given API base, dropping trailing slashes.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut api_base_url = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self { api_base_url }
    }

    /// Config from the `SHOWROOM_API_BASE` value baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SHOWROOM_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// True when the base is a path on the current origin (e.g. `/api`).
    pub fn is_relative(&self) -> bool {
        !self.api_base_url.contains("://")
    }

    /// Anchor a relative base on `origin` (e.g. `window.location.origin`).
    /// Absolute bases are returned unchanged.
    #[must_use]
    pub fn resolve_against(self, origin: &str) -> Self {
        if !self.is_relative() {
            return self;
        }
        let origin = origin.trim_end_matches('/');
        let path = self.api_base_url.trim_start_matches('/');
        if path.is_empty() {
            Self::new(origin)
        } else {
            Self::new(format!("{origin}/{path}"))
        }
    }

    /// Full URL for a resource request path such as `articles?get=all`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = SiteConfig::new("https://api.example.com/v1///");
        assert_eq!(config.api_base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = SiteConfig::new("https://api.example.com/");
        assert_eq!(
            config.endpoint("articles?get=all"),
            "https://api.example.com/articles?get=all"
        );
        assert_eq!(
            config.endpoint("/socials"),
            "https://api.example.com/socials"
        );
    }

    #[test]
    fn test_relative_base_resolves_against_origin() {
        let config = SiteConfig::new("/api").resolve_against("http://localhost:8080/");
        assert_eq!(config.api_base_url(), "http://localhost:8080/api");
        assert!(!config.is_relative());
    }

    #[test]
    fn test_absolute_base_ignores_origin() {
        let config = SiteConfig::new("https://cms.example.com").resolve_against("http://localhost");
        assert_eq!(config.api_base_url(), "https://cms.example.com");
    }

    #[test]
    fn test_root_base_resolves_to_origin() {
        let config = SiteConfig::new("/").resolve_against("https://example.com");
        assert_eq!(config.api_base_url(), "https://example.com");
    }
}
