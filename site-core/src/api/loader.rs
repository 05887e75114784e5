use futures::stream::{FuturesUnordered, Stream};
use serde_json::Value;

use super::client::Fetch;
use super::resource::{Resource, PAGE_CONTENTS_PATH};
use crate::error::FetchError;
use crate::models::PageContent;
use crate::store::DataStore;

/// A successfully fetched resource payload, ready to merge into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEntry {
    pub resource: Resource,
    pub value: Value,
}

/// Outcome of loading every resource.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<Resource>,
    pub failed: Vec<(Resource, FetchError)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetches page content and resources through a [`Fetch`] implementation.
///
/// Each resource is fetched on its own: nothing waits on another resource
/// and a failure only leaves that resource's store key unset. There is no
/// retry, backoff, or timeout.
#[derive(Debug, Clone)]
pub struct DataLoader<F> {
    fetcher: F,
}

impl<F: Fetch> DataLoader<F> {
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the page copy (`page_contents`).
    pub async fn fetch_page_contents(&self) -> Result<PageContent, FetchError> {
        let value = self.fetch_payload(PAGE_CONTENTS_PATH, PAGE_CONTENTS_PATH).await?;
        serde_json::from_value(value).map_err(|source| {
            let err = FetchError::Decode {
                path: PAGE_CONTENTS_PATH.to_string(),
                source,
            };
            tracing::error!("{err}");
            err
        })
    }

    /// Fetch one resource and pick its payload out of the response.
    pub async fn fetch_resource(&self, resource: Resource) -> Result<StoreEntry, FetchError> {
        let value = self
            .fetch_payload(resource.path(), resource.access_key())
            .await?;
        tracing::debug!(store_key = resource.store_key(), "Fetched {} data", resource);
        Ok(StoreEntry { resource, value })
    }

    /// Fetch every resource concurrently, yielding results in completion order.
    pub fn stream_all(
        &self,
    ) -> impl Stream<Item = (Resource, Result<StoreEntry, FetchError>)> + '_ {
        Resource::ALL
            .into_iter()
            .map(|resource| async move { (resource, self.fetch_resource(resource).await) })
            .collect::<FuturesUnordered<_>>()
    }

    /// Fetch every resource and merge the successes into `store`.
    pub async fn load_all(&self, store: &mut DataStore) -> LoadReport {
        use futures::StreamExt;

        let mut report = LoadReport::default();
        let mut results = std::pin::pin!(self.stream_all());
        while let Some((resource, result)) = results.next().await {
            match result {
                Ok(entry) => {
                    store.insert(entry);
                    report.loaded.push(resource);
                }
                Err(e) => report.failed.push((resource, e)),
            }
        }

        tracing::info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "Resource loading finished"
        );
        report
    }

    async fn fetch_payload(&self, path: &str, key: &str) -> Result<Value, FetchError> {
        let result = match self.fetcher.get(path).await {
            Ok(mut response) if response.is_ok() => {
                response.take(key).ok_or_else(|| FetchError::MissingKey {
                    path: path.to_string(),
                    key: key.to_string(),
                })
            }
            Ok(response) => Err(FetchError::Status {
                path: path.to_string(),
                status: response.status,
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::error!("{e}");
        }
        result
    }
}
