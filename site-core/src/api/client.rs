use std::future::Future;

use serde_json::Value;

use crate::config::SiteConfig;
use crate::error::FetchError;

/// Raw answer of a `GET <base>/<path>` request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body (`null` when a non-200 body was not JSON)
    pub data: Value,
}

impl ApiResponse {
    pub const fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Take the payload stored under `key` in `data`, treating `null` as absent.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.data
            .as_object_mut()?
            .remove(key)
            .filter(|v| !v.is_null())
    }
}

/// Issues GET requests against the site API.
///
/// Futures are not required to be `Send`: in the browser every fetch runs on
/// the single UI thread.
pub trait Fetch {
    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, FetchError>>;
}

/// `reqwest`-backed fetcher; uses the browser `fetch` API on wasm32.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: SiteConfig,
}

impl HttpFetcher {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, path: &str) -> Result<ApiResponse, FetchError> {
        let url = self.config.endpoint(path);
        tracing::debug!("GET {}", url);

        let network = |e: reqwest::Error| FetchError::Network {
            path: path.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;

        let data = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(_) if status != 200 => Value::Null,
            Err(source) => {
                return Err(FetchError::Decode {
                    path: path.to_string(),
                    source,
                })
            }
        };

        Ok(ApiResponse::new(status, data))
    }
}
