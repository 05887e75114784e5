use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{Resource, StoreEntry};
use crate::error::FetchError;
use crate::models::ContentItem;

/// Fetched resource payloads keyed by resource.
///
/// Entries arrive independently and in any order; each resource owns its own
/// key, so merging is order-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    entries: BTreeMap<Resource, Value>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fetched entry, returning the value it replaced (if any).
    pub fn insert(&mut self, entry: StoreEntry) -> Option<Value> {
        self.entries.insert(entry.resource, entry.value)
    }

    /// Raw payload of a resource; `null` payloads count as absent.
    pub fn get(&self, resource: Resource) -> Option<&Value> {
        self.entries.get(&resource).filter(|v| !v.is_null())
    }

    pub fn contains(&self, resource: Resource) -> bool {
        self.get(resource).is_some()
    }

    /// Decode a payload into a typed model. `Ok(None)` when not loaded yet.
    pub fn decode<T: DeserializeOwned>(&self, resource: Resource) -> Result<Option<T>, FetchError> {
        self.get(resource)
            .map(|value| {
                T::deserialize(value).map_err(|source| FetchError::Decode {
                    path: resource.path().to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Presentational items of a payload; empty when not loaded.
    pub fn items(&self, resource: Resource) -> Vec<ContentItem> {
        self.get(resource).map(ContentItem::list).unwrap_or_default()
    }

    /// Resources currently loaded, in declaration order.
    pub fn resources(&self) -> impl Iterator<Item = Resource> + '_ {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(r, _)| *r)
    }

    pub fn len(&self) -> usize {
        self.resources().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<StoreEntry> for DataStore {
    fn from_iter<I: IntoIterator<Item = StoreEntry>>(iter: I) -> Self {
        let mut store = Self::new();
        for entry in iter {
            store.insert(entry);
        }
        store
    }
}
