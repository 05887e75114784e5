use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Product;

/// Catalog ordering selected in the "Sort By" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Highest identifier first
    #[default]
    Latest,
    /// Lowest identifier first
    Oldest,
    AToZ,
    ZToA,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort mode `{0}`")]
pub struct ParseSortModeError(String);

impl SortMode {
    /// Modes in the order they are offered.
    pub const ALL: [Self; 4] = [Self::Latest, Self::Oldest, Self::AToZ, Self::ZToA];

    /// Value used in the `<select>` element.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::AToZ => "a-z",
            Self::ZToA => "z-a",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Oldest => "Oldest",
            Self::AToZ => "A - Z (Ascending)",
            Self::ZToA => "Z - A (Descending)",
        }
    }

    /// Total order for this mode. Names compare case-insensitively and ties
    /// fall back to the identifier, so `a-z` is the exact reverse of `z-a`.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Latest => b.id.cmp(&a.id),
            Self::Oldest => a.id.cmp(&b.id),
            Self::AToZ => by_name(a, b),
            Self::ZToA => by_name(b, a),
        }
    }

    /// Stable sort of `products` in this mode.
    pub fn sort(self, products: &mut [&Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseSortModeError(s.to_string()))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
