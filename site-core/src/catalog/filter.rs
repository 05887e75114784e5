use std::collections::{BTreeMap, BTreeSet};

use crate::models::{FilterKey, FilterSchema, Product};

/// Selected values per filter key.
///
/// Only names that appear in the schema can be selected. An empty selection
/// for a key puts no constraint on that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: BTreeMap<FilterKey, BTreeSet<String>>,
}

impl FilterSelection {
    /// An empty selection for every key of the schema.
    pub fn for_schema(schema: &FilterSchema) -> Self {
        Self {
            selected: schema.keys().map(|key| (key, BTreeSet::new())).collect(),
        }
    }

    /// Default selection, pre-selecting the commodities whose slug equals the
    /// `commodity` query parameter.
    pub fn initial(schema: &FilterSchema, commodity_slug: Option<&str>) -> Self {
        let mut selection = Self::for_schema(schema);
        if let Some(slug) = commodity_slug {
            let names: Vec<String> = schema
                .find_by_slug(FilterKey::Commodities, slug)
                .map(|o| o.name.clone())
                .collect();
            selection.set(schema, FilterKey::Commodities, names);
        }
        selection
    }

    /// Keys tracked by this selection, in schema order.
    pub fn keys(&self) -> impl Iterator<Item = FilterKey> + '_ {
        self.selected.keys().copied()
    }

    pub fn values(&self, key: FilterKey) -> impl Iterator<Item = &str> {
        self.selected
            .get(&key)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn is_selected(&self, key: FilterKey, name: &str) -> bool {
        self.selected.get(&key).is_some_and(|set| set.contains(name))
    }

    /// Replace the selection of `key`. Names unknown to the schema are
    /// dropped. Returns whether the selection changed.
    pub fn set<I, S>(&mut self, schema: &FilterSchema, key: FilterKey, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !schema.has_key(key) {
            return false;
        }
        let values: BTreeSet<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|name| schema.contains(key, name))
            .collect();

        let current = self.selected.entry(key).or_default();
        if *current == values {
            return false;
        }
        *current = values;
        true
    }

    /// Flip a single value. Returns whether the selection changed.
    pub fn toggle(&mut self, schema: &FilterSchema, key: FilterKey, name: &str) -> bool {
        if !schema.contains(key, name) {
            return false;
        }
        let set = self.selected.entry(key).or_default();
        if !set.remove(name) {
            set.insert(name.to_string());
        }
        true
    }

    /// Empty every key's selection, keeping the keys.
    pub fn clear(&mut self) {
        for set in self.selected.values_mut() {
            set.clear();
        }
    }

    /// True when nothing is selected under any key.
    pub fn is_empty(&self) -> bool {
        self.selected.values().all(BTreeSet::is_empty)
    }

    /// AND across keys, OR within a key.
    pub fn matches(&self, product: &Product) -> bool {
        self.selected
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .all(|(key, values)| key_matches(*key, product, values))
    }
}

fn key_matches(key: FilterKey, product: &Product, values: &BTreeSet<String>) -> bool {
    match key {
        FilterKey::Commodities => product.commodity_names().any(|name| values.contains(name)),
        FilterKey::Regions => product.all_region_names().any(|name| values.contains(name)),
    }
}
